use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TranscriptionEngine;
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::assembly_ai_engine::AssemblyAiEngine;
use super::google_speech_engine::GoogleSpeechEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    OpenAi,
    AssemblyAi,
    Google,
}

impl TranscriptionProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionProvider::OpenAi => "openai",
            TranscriptionProvider::AssemblyAi => "assemblyai",
            TranscriptionProvider::Google => "google",
        }
    }
}

impl From<TranscriptionProviderSetting> for TranscriptionProvider {
    fn from(setting: TranscriptionProviderSetting) -> Self {
        match setting {
            TranscriptionProviderSetting::OpenAi => TranscriptionProvider::OpenAi,
            TranscriptionProviderSetting::AssemblyAi => TranscriptionProvider::AssemblyAi,
            TranscriptionProviderSetting::Google => TranscriptionProvider::Google,
        }
    }
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// Picks a strategy from configured credentials alone. An explicit provider
    /// wins but still needs its own credential.
    pub fn select(settings: &TranscriptionSettings) -> Option<TranscriptionProvider> {
        let has_credential = |provider: TranscriptionProvider| {
            credential(settings, provider).is_some()
        };

        if let Some(explicit) = settings.provider {
            let provider = TranscriptionProvider::from(explicit);
            return has_credential(provider).then_some(provider);
        }

        [
            TranscriptionProvider::OpenAi,
            TranscriptionProvider::AssemblyAi,
            TranscriptionProvider::Google,
        ]
        .into_iter()
        .find(|p| has_credential(*p))
    }

    pub fn create(settings: &TranscriptionSettings) -> Option<Arc<dyn TranscriptionEngine>> {
        let Some(provider) = Self::select(settings) else {
            tracing::warn!(
                requested = ?settings.provider,
                "No transcription credential configured; transcription disabled"
            );
            return None;
        };
        let api_key = credential(settings, provider)?;

        tracing::info!(provider = provider.as_str(), "Transcription engine selected");

        let engine: Arc<dyn TranscriptionEngine> = match provider {
            TranscriptionProvider::OpenAi => {
                let openai = &settings.openai;
                Arc::new(OpenAiWhisperEngine::new(
                    api_key.to_string(),
                    Some(openai.base_url.clone()),
                    Some(openai.model.clone()),
                    Some(openai.language.clone()),
                ))
            }
            TranscriptionProvider::AssemblyAi => {
                let assembly_ai = &settings.assembly_ai;
                Arc::new(
                    AssemblyAiEngine::new(api_key, Some(assembly_ai.base_url.as_str()))
                        .with_speech_model(
                            &assembly_ai.speech_model,
                            assembly_ai.language_confidence_threshold,
                        )
                        .with_polling(
                            Duration::from_millis(assembly_ai.poll_interval_ms),
                            assembly_ai.max_poll_attempts,
                        ),
                )
            }
            TranscriptionProvider::Google => {
                let google = &settings.google;
                Arc::new(
                    GoogleSpeechEngine::new(api_key, Some(google.base_url.as_str()))
                        .with_languages(
                            &google.language_code,
                            google.alternative_language_codes.clone(),
                        )
                        .with_model(&google.model),
                )
            }
        };

        Some(engine)
    }
}

fn credential(settings: &TranscriptionSettings, provider: TranscriptionProvider) -> Option<&str> {
    let key = match provider {
        TranscriptionProvider::OpenAi => settings.openai.api_key.as_deref(),
        TranscriptionProvider::AssemblyAi => settings.assembly_ai.api_key.as_deref(),
        TranscriptionProvider::Google => settings.google.api_key.as_deref(),
    };
    key.map(str::trim).filter(|k| !k.is_empty())
}
