mod error_response;
mod generate_name;
mod health;
mod names;
mod transcribe;

pub use error_response::{ErrorResponse, error_response};
pub use generate_name::{GenerateNameRequest, generate_name_handler};
pub use health::{HealthResponse, health_handler};
pub use names::{list_names_handler, random_name_handler};
pub use transcribe::{AUDIO_FIELD, TranscribeResponse, transcribe_handler};
