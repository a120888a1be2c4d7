use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioClip;

/// Dispatches audio to whichever transcription engine the configuration resolved.
pub struct TranscriptionService {
    engine: Option<Arc<dyn TranscriptionEngine>>,
}

impl TranscriptionService {
    pub fn new(engine: Option<Arc<dyn TranscriptionEngine>>) -> Self {
        Self { engine }
    }

    pub fn provider_name(&self) -> Option<&'static str> {
        self.engine.as_ref().map(|e| e.provider_name())
    }

    pub async fn transcribe(&self, audio: &AudioClip) -> Result<String, TranscriptionError> {
        let engine = self
            .engine
            .as_ref()
            .ok_or(TranscriptionError::MissingCredential(None))?;

        tracing::debug!(
            provider = engine.provider_name(),
            file_name = %audio.file_name,
            mime_type = %audio.mime_type,
            bytes = audio.len(),
            "Dispatching audio for transcription"
        );

        let transcript = engine.transcribe(audio).await?;

        tracing::info!(
            provider = engine.provider_name(),
            chars = transcript.len(),
            "Transcription completed"
        );

        Ok(transcript)
    }
}
