mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AssemblyAiSettings, GoogleSpeechSettings, LlmSettings, LoggingSettings,
    OpenAiTranscriptionSettings, ServerSettings, Settings, TranscriptionProviderSetting,
    TranscriptionSettings,
};
