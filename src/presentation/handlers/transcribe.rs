use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{LlmClient, TranscriptionError};
use crate::domain::AudioClip;
use crate::presentation::state::AppState;

use super::error_response::error_response;

pub const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<L>(
    State(state): State<AppState<L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Transcribe request is not multipart");
            return error_response(StatusCode::BAD_REQUEST, "No audio file provided");
        }
    };

    let audio = match read_audio_field(&mut multipart).await {
        Ok(Some(audio)) => audio,
        Ok(None) => {
            tracing::warn!("Transcribe request without an audio part");
            return error_response(StatusCode::BAD_REQUEST, "No audio file provided");
        }
        Err(message) => {
            tracing::warn!(error = %message, "Failed to read multipart body");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    if audio.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Audio file is empty");
    }

    match state.transcription_service.transcribe(&audio).await {
        Ok(transcript) => (StatusCode::OK, Json(TranscribeResponse { transcript })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            transcription_error_response(&e)
        }
    }
}

async fn read_audio_field(multipart: &mut Multipart) -> Result<Option<AudioClip>, String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read multipart: {}", e))?
    {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let mime_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| format!("Failed to read audio: {}", e))?;

        return Ok(Some(AudioClip::new(
            data,
            mime_type.as_deref(),
            file_name.as_deref(),
        )));
    }

    Ok(None)
}

fn transcription_error_response(error: &TranscriptionError) -> Response {
    match error {
        TranscriptionError::MissingCredential(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Transcription API key not configured",
        ),
        TranscriptionError::Upstream { status, message } => {
            let status = status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, format!("Transcription failed: {}", message))
        }
        TranscriptionError::Timeout { .. } => error_response(
            StatusCode::GATEWAY_TIMEOUT,
            "Transcription did not finish in time",
        ),
        TranscriptionError::ApiRequestFailed(_) | TranscriptionError::InvalidResponse(_) => {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to transcribe audio",
            )
        }
    }
}
