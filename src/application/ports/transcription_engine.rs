use async_trait::async_trait;

use crate::domain::AudioClip;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn transcribe(&self, audio: &AudioClip) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("no transcription credential configured{}", provider_suffix(.0))]
    MissingCredential(Option<&'static str>),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upstream error{}: {message}", status_suffix(.status))]
    Upstream {
        status: Option<u16>,
        message: String,
    },
    #[error("transcription did not finish after {attempts} status checks")]
    Timeout { attempts: u32 },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl TranscriptionError {
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        TranscriptionError::Upstream {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn upstream_detail(message: impl Into<String>) -> Self {
        TranscriptionError::Upstream {
            status: None,
            message: message.into(),
        }
    }
}

fn provider_suffix(provider: &Option<&'static str>) -> String {
    provider
        .map(|p| format!(" for {}", p))
        .unwrap_or_default()
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {})", s)).unwrap_or_default()
}
