use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub text_generation_configured: bool,
    pub transcription_provider: Option<String>,
    pub catalog_size: usize,
}

pub async fn health_handler<L>(State(state): State<AppState<L>>) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            text_generation_configured: state.name_generation_service.is_configured(),
            transcription_provider: state
                .transcription_service
                .provider_name()
                .map(str::to_string),
            catalog_size: state.name_catalog.len(),
        }),
    )
}
