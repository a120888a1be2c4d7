use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioClip;

use super::audio_encoding::{InlineAudioEncoding, encode_audio_base64};

pub const DEFAULT_GOOGLE_SPEECH_BASE_URL: &str = "https://speech.googleapis.com";
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";
pub const DEFAULT_ALTERNATIVE_LANGUAGE_CODES: [&str; 3] = ["en-GH", "en-NG", "en-GB"];
pub const DEFAULT_RECOGNITION_MODEL: &str = "latest_long";

/// Single synchronous recognize call with the audio inlined as base64.
pub struct GoogleSpeechEngine {
    client: Client,
    base_url: String,
    api_key: String,
    language_code: String,
    alternative_language_codes: Vec<String>,
    model: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate_hertz: Option<u32>,
    pub language_code: String,
    pub alternative_language_codes: Vec<String>,
    pub enable_automatic_punctuation: bool,
    pub model: String,
    pub use_enhanced: bool,
}

#[derive(Serialize)]
pub struct RecognitionAudio {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
}

impl RecognizeResponse {
    /// Top alternative of every result segment, space-joined.
    pub fn transcript(&self) -> String {
        self.results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

impl GoogleSpeechEngine {
    pub fn new(api_key: &str, base_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url
                .unwrap_or(DEFAULT_GOOGLE_SPEECH_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            api_key: api_key.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            alternative_language_codes: DEFAULT_ALTERNATIVE_LANGUAGE_CODES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            model: DEFAULT_RECOGNITION_MODEL.to_string(),
        }
    }

    pub fn with_languages(mut self, language_code: &str, alternatives: Vec<String>) -> Self {
        self.language_code = language_code.to_string();
        self.alternative_language_codes = alternatives;
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn build_request(&self, audio: &AudioClip) -> RecognizeRequest {
        let encoding = InlineAudioEncoding::from_mime(&audio.mime_type);
        RecognizeRequest {
            config: RecognitionConfig {
                encoding: encoding.as_str(),
                sample_rate_hertz: encoding.sample_rate_hertz(),
                language_code: self.language_code.clone(),
                alternative_language_codes: self.alternative_language_codes.clone(),
                enable_automatic_punctuation: true,
                model: self.model.clone(),
                use_enhanced: true,
            },
            audio: RecognitionAudio {
                content: encode_audio_base64(audio),
            },
        }
    }
}

#[async_trait]
impl TranscriptionEngine for GoogleSpeechEngine {
    fn provider_name(&self) -> &'static str {
        "google"
    }

    async fn transcribe(&self, audio: &AudioClip) -> Result<String, TranscriptionError> {
        let request_body = self.build_request(audio);

        tracing::debug!(
            encoding = request_body.config.encoding,
            language = %self.language_code,
            "Sending inline audio to Google Speech-to-Text"
        );

        let response = self
            .client
            .post(format!("{}/v1/speech:recognize", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                TranscriptionError::ApiRequestFailed(format!("request: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::upstream_status(
                status.as_u16(),
                format!("recognize failed: {}", body),
            ));
        }

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| {
                TranscriptionError::InvalidResponse(format!(
                    "parse response: {}",
                    e.without_url()
                ))
            })?;

        Ok(result.transcript())
    }
}
