use base64::{Engine as _, engine::general_purpose};

use crate::domain::AudioClip;

/// Sample rate declared for containers that do not carry one in a header.
pub const INLINE_SAMPLE_RATE_HERTZ: u32 = 48_000;

/// Encoding names understood by the inline recognition API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineAudioEncoding {
    WebmOpus,
    OggOpus,
    Linear16,
    Flac,
    Mp3,
    Unspecified,
}

impl InlineAudioEncoding {
    pub fn from_mime(mime_type: &str) -> Self {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match essence.as_str() {
            "audio/webm" | "video/webm" => InlineAudioEncoding::WebmOpus,
            "audio/ogg" | "audio/opus" => InlineAudioEncoding::OggOpus,
            "audio/wav" | "audio/x-wav" | "audio/wave" | "audio/vnd.wave" => {
                InlineAudioEncoding::Linear16
            }
            "audio/flac" | "audio/x-flac" => InlineAudioEncoding::Flac,
            "audio/mpeg" | "audio/mp3" => InlineAudioEncoding::Mp3,
            _ => InlineAudioEncoding::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InlineAudioEncoding::WebmOpus => "WEBM_OPUS",
            InlineAudioEncoding::OggOpus => "OGG_OPUS",
            InlineAudioEncoding::Linear16 => "LINEAR16",
            InlineAudioEncoding::Flac => "FLAC",
            InlineAudioEncoding::Mp3 => "MP3",
            InlineAudioEncoding::Unspecified => "ENCODING_UNSPECIFIED",
        }
    }

    /// WAV and FLAC headers carry their own rate; sending a mismatched one is rejected upstream.
    pub fn sample_rate_hertz(&self) -> Option<u32> {
        match self {
            InlineAudioEncoding::WebmOpus
            | InlineAudioEncoding::OggOpus
            | InlineAudioEncoding::Mp3 => Some(INLINE_SAMPLE_RATE_HERTZ),
            InlineAudioEncoding::Linear16
            | InlineAudioEncoding::Flac
            | InlineAudioEncoding::Unspecified => None,
        }
    }
}

pub fn encode_audio_base64(audio: &AudioClip) -> String {
    general_purpose::STANDARD.encode(&audio.data)
}

pub fn decode_audio_base64(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(encoded)
}
