use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptionJobStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

impl TranscriptionJobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionJobStatus::Queued => "queued",
            TranscriptionJobStatus::Processing => "processing",
            TranscriptionJobStatus::Completed => "completed",
            TranscriptionJobStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TranscriptionJobStatus::Completed | TranscriptionJobStatus::Error
        )
    }
}

impl FromStr for TranscriptionJobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(TranscriptionJobStatus::Queued),
            "processing" => Ok(TranscriptionJobStatus::Processing),
            "completed" => Ok(TranscriptionJobStatus::Completed),
            "error" => Ok(TranscriptionJobStatus::Error),
            _ => Err(format!("Invalid transcription job status: {}", s)),
        }
    }
}

impl fmt::Display for TranscriptionJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of an asynchronous transcription job as reported by one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionJob {
    pub id: String,
    pub status: TranscriptionJobStatus,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl TranscriptionJob {
    pub fn new(id: impl Into<String>, status: TranscriptionJobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            text: None,
            error: None,
        }
    }
}
