use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Defaults, then `appsettings.{env}` if present, then `APP_*` variables
    /// (`__` between sections), then the conventional credential variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let credential = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Config::builder()
            .add_source(File::with_name(&environment.settings_file_name()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("transcription.google.alternative_language_codes")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", credential("OPENAI_API_KEY"))?
            .set_override_option("transcription.openai.api_key", credential("OPENAI_API_KEY"))?
            .set_override_option(
                "transcription.assembly_ai.api_key",
                credential("ASSEMBLYAI_API_KEY"),
            )?
            .set_override_option(
                "transcription.google.api_key",
                credential("GOOGLE_SPEECH_API_KEY"),
            )?
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-3.5-turbo".to_string(),
            max_tokens: 300,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "assemblyai", alias = "assembly_ai")]
    AssemblyAi,
    Google,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: Option<TranscriptionProviderSetting>,
    pub max_upload_mb: usize,
    pub openai: OpenAiTranscriptionSettings,
    pub assembly_ai: AssemblyAiSettings,
    pub google: GoogleSpeechSettings,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            provider: None,
            max_upload_mb: 25,
            openai: OpenAiTranscriptionSettings::default(),
            assembly_ai: AssemblyAiSettings::default(),
            google: GoogleSpeechSettings::default(),
        }
    }
}

impl TranscriptionSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiTranscriptionSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub language: String,
}

impl Default for OpenAiTranscriptionSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "whisper-1".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssemblyAiSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub speech_model: String,
    pub language_confidence_threshold: f32,
    pub poll_interval_ms: u64,
    pub max_poll_attempts: u32,
}

impl Default for AssemblyAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.assemblyai.com".to_string(),
            speech_model: "best".to_string(),
            language_confidence_threshold: 0.4,
            poll_interval_ms: 1000,
            max_poll_attempts: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoogleSpeechSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub language_code: String,
    pub alternative_language_codes: Vec<String>,
    pub model: String,
}

impl Default for GoogleSpeechSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://speech.googleapis.com".to_string(),
            language_code: "en-US".to_string(),
            alternative_language_codes: vec![
                "en-GH".to_string(),
                "en-NG".to_string(),
                "en-GB".to_string(),
            ],
            model: "latest_long".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: Option<String>,
    pub enable_json: bool,
}
