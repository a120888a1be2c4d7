use std::future::Future;
use std::time::Duration;

use crate::application::ports::TranscriptionError;
use crate::domain::{TranscriptionJob, TranscriptionJobStatus};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 30;

/// Progress of a bounded status-polling loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    Polling { attempts: u32 },
    Completed(String),
    Errored(String),
    TimedOut { attempts: u32 },
}

impl PollState {
    pub fn start() -> Self {
        PollState::Polling { attempts: 0 }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollState::Polling { .. })
    }

    /// Folds one observed job snapshot into the state. Terminal states absorb further input.
    pub fn advance(self, job: &TranscriptionJob, max_attempts: u32) -> Self {
        let attempts = match self {
            PollState::Polling { attempts } => attempts + 1,
            terminal => return terminal,
        };

        match job.status {
            TranscriptionJobStatus::Completed => {
                PollState::Completed(job.text.as_deref().unwrap_or_default().trim().to_string())
            }
            TranscriptionJobStatus::Error => PollState::Errored(
                job.error
                    .clone()
                    .unwrap_or_else(|| "transcription job failed".to_string()),
            ),
            _ if attempts >= max_attempts => PollState::TimedOut { attempts },
            _ => PollState::Polling { attempts },
        }
    }
}

/// Fixed-interval poller: no backoff, hard cap on status checks.
#[derive(Debug, Clone, Copy)]
pub struct JobPoller {
    interval: Duration,
    max_attempts: u32,
}

impl Default for JobPoller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_MAX_POLL_ATTEMPTS)
    }
}

impl JobPoller {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Calls `check` until the job reaches a terminal status or the attempt cap is hit.
    ///
    /// Waiting uses `tokio::time::sleep`, so dropping the returned future (for example when
    /// the inbound request is aborted) stops polling at the next await point.
    pub async fn run<F, Fut>(&self, mut check: F) -> Result<String, TranscriptionError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<TranscriptionJob, TranscriptionError>>,
    {
        let mut state = PollState::start();

        loop {
            match state {
                PollState::Polling { attempts } => {
                    if attempts > 0 {
                        tokio::time::sleep(self.interval).await;
                    }
                    let job = check().await?;
                    tracing::debug!(
                        job_id = %job.id,
                        status = %job.status,
                        attempt = attempts + 1,
                        "Polled transcription job"
                    );
                    state = state.advance(&job, self.max_attempts);
                }
                PollState::Completed(text) => return Ok(text),
                PollState::Errored(detail) => {
                    return Err(TranscriptionError::upstream_detail(detail));
                }
                PollState::TimedOut { attempts } => {
                    return Err(TranscriptionError::Timeout { attempts });
                }
            }
        }
    }
}
