mod assembly_ai_engine;
pub mod audio_encoding;
mod google_speech_engine;
pub mod job_poller;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use assembly_ai_engine::{AssemblyAiEngine, TranscriptResponse};
pub use audio_encoding::{InlineAudioEncoding, decode_audio_base64, encode_audio_base64};
pub use google_speech_engine::{GoogleSpeechEngine, RecognizeResponse};
pub use job_poller::{JobPoller, PollState};
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
