use bytes::Bytes;

pub const DEFAULT_AUDIO_MIME: &str = "audio/webm";
pub const DEFAULT_AUDIO_FILE_NAME: &str = "recording.webm";

/// Recorded audio scoped to a single transcription request.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub data: Bytes,
    pub mime_type: String,
    pub file_name: String,
}

impl AudioClip {
    pub fn new(data: impl Into<Bytes>, mime_type: Option<&str>, file_name: Option<&str>) -> Self {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_AUDIO_MIME)
            .to_string();
        let file_name = file_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_AUDIO_FILE_NAME)
            .to_string();
        Self {
            data: data.into(),
            mime_type,
            file_name,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// MIME type without parameters, lowercased (`audio/webm;codecs=opus` -> `audio/webm`).
    pub fn essence(&self) -> String {
        self.mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    }
}
