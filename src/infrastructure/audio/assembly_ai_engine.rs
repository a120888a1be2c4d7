use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioClip, TranscriptionJob, TranscriptionJobStatus};

use super::job_poller::JobPoller;

pub const DEFAULT_ASSEMBLY_AI_BASE_URL: &str = "https://api.assemblyai.com";
pub const DEFAULT_SPEECH_MODEL: &str = "best";
pub const DEFAULT_LANGUAGE_CONFIDENCE_THRESHOLD: f32 = 0.4;

/// Upload, submit a job, then poll it until it settles.
pub struct AssemblyAiEngine {
    client: Client,
    base_url: String,
    api_key: String,
    speech_model: String,
    language_confidence_threshold: f32,
    poller: JobPoller,
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Serialize)]
pub struct TranscriptRequest<'a> {
    pub audio_url: &'a str,
    pub punctuate: bool,
    pub format_text: bool,
    pub speaker_labels: bool,
    pub speech_model: &'a str,
    pub language_detection: bool,
    pub language_confidence_threshold: f32,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptResponse {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TranscriptResponse {
    /// Statuses outside the known set (`submitted` and the like) count as still processing.
    pub fn into_job(self) -> TranscriptionJob {
        let status = self.status.parse::<TranscriptionJobStatus>().unwrap_or_else(|_| {
            tracing::debug!(status = %self.status, "Unrecognised job status, continuing to poll");
            TranscriptionJobStatus::Processing
        });
        TranscriptionJob {
            id: self.id,
            status,
            text: self.text,
            error: self.error,
        }
    }
}

impl AssemblyAiEngine {
    pub fn new(api_key: &str, base_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url
                .unwrap_or(DEFAULT_ASSEMBLY_AI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            api_key: api_key.to_string(),
            speech_model: DEFAULT_SPEECH_MODEL.to_string(),
            language_confidence_threshold: DEFAULT_LANGUAGE_CONFIDENCE_THRESHOLD,
            poller: JobPoller::default(),
        }
    }

    pub fn with_speech_model(mut self, speech_model: &str, confidence_threshold: f32) -> Self {
        self.speech_model = speech_model.to_string();
        self.language_confidence_threshold = confidence_threshold;
        self
    }

    pub fn with_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.poller = JobPoller::new(interval, max_attempts);
        self
    }

    async fn upload(&self, audio: &AudioClip) -> Result<String, TranscriptionError> {
        let response = self
            .client
            .post(format!("{}/v2/upload", self.base_url))
            .header("authorization", &self.api_key)
            .header("content-type", "application/octet-stream")
            .body(audio.data.clone())
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("upload: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::upstream_status(
                status.as_u16(),
                format!("upload failed: {}", body),
            ));
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("upload response: {}", e)))?;

        Ok(upload.upload_url)
    }

    async fn submit(&self, audio_url: &str) -> Result<TranscriptionJob, TranscriptionError> {
        let request_body = TranscriptRequest {
            audio_url,
            punctuate: true,
            format_text: true,
            speaker_labels: false,
            speech_model: &self.speech_model,
            language_detection: true,
            language_confidence_threshold: self.language_confidence_threshold,
        };

        let response = self
            .client
            .post(format!("{}/v2/transcript", self.base_url))
            .header("authorization", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("submit: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::upstream_status(
                status.as_u16(),
                format!("job submission failed: {}", body),
            ));
        }

        let transcript: TranscriptResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("submit response: {}", e)))?;

        Ok(transcript.into_job())
    }

    async fn fetch_status(&self, job_id: &str) -> Result<TranscriptionJob, TranscriptionError> {
        let response = self
            .client
            .get(format!("{}/v2/transcript/{}", self.base_url, job_id))
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("poll: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::upstream_status(
                status.as_u16(),
                format!("status check failed: {}", body),
            ));
        }

        let transcript: TranscriptResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("poll response: {}", e)))?;

        Ok(transcript.into_job())
    }
}

#[async_trait]
impl TranscriptionEngine for AssemblyAiEngine {
    fn provider_name(&self) -> &'static str {
        "assemblyai"
    }

    #[tracing::instrument(skip(self, audio), fields(bytes = audio.len()))]
    async fn transcribe(&self, audio: &AudioClip) -> Result<String, TranscriptionError> {
        let audio_url = self.upload(audio).await?;
        tracing::debug!("Audio uploaded to AssemblyAI");

        let job = self.submit(&audio_url).await?;
        tracing::debug!(job_id = %job.id, status = %job.status, "AssemblyAI job submitted");

        let job_id = job.id;
        self.poller.run(|| self.fetch_status(&job_id)).await
    }
}
