use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::LlmClient;
use crate::application::services::NameGenerationError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Deserialize)]
pub struct GenerateNameRequest {
    pub context: Option<serde_json::Value>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn generate_name_handler<L>(
    State(state): State<AppState<L>>,
    payload: Result<Json<GenerateNameRequest>, JsonRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let context = match payload {
        Ok(Json(GenerateNameRequest {
            context: Some(serde_json::Value::String(context)),
        })) if !context.trim().is_empty() => context,
        Ok(_) => {
            tracing::warn!("Generate-name request without a usable context");
            return error_response(StatusCode::BAD_REQUEST, "Context is required");
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed generate-name request");
            return error_response(StatusCode::BAD_REQUEST, "Context is required");
        }
    };

    tracing::debug!(context = %sanitize_prompt(&context), "Generate-name request received");

    match state.name_generation_service.generate(&context).await {
        Ok(generated) => (StatusCode::OK, Json(generated)).into_response(),
        Err(NameGenerationError::InvalidInput(message)) => {
            error_response(StatusCode::BAD_REQUEST, message)
        }
        Err(NameGenerationError::MissingCredential) => {
            tracing::error!("Text-generation credential missing");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Text-generation API key not configured",
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Name generation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate name")
        }
    }
}
