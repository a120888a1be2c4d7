mod audio_clip;
mod gender;
mod generated_name;
mod name_record;
mod transcription_job;

pub use audio_clip::{AudioClip, DEFAULT_AUDIO_FILE_NAME, DEFAULT_AUDIO_MIME};
pub use gender::{Gender, GenderFilter};
pub use generated_name::{FALLBACK_EXPLANATION, FALLBACK_MEANING, FALLBACK_NAME, GeneratedName};
pub use name_record::{FullName, NameRecord};
pub use transcription_job::{TranscriptionJob, TranscriptionJobStatus};
