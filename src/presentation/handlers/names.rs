use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::{Gender, GenderFilter, NameRecord};
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Debug, Deserialize)]
pub struct RandomNameQuery {
    pub gender: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize)]
pub struct RandomNameResponse {
    pub name: String,
    pub meaning: String,
    pub tribe: String,
    pub gender: Gender,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ListNamesQuery {
    pub gender: Option<String>,
    pub tribe: Option<String>,
}

#[derive(Serialize)]
pub struct ListNamesResponse {
    pub count: usize,
    pub names: Vec<NameRecord>,
}

fn parse_filter(gender: Option<&str>) -> Result<GenderFilter, Response> {
    gender
        .map(str::parse::<GenderFilter>)
        .transpose()
        .map(Option::unwrap_or_default)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e))
}

#[tracing::instrument(skip(state))]
pub async fn random_name_handler<L>(
    State(state): State<AppState<L>>,
    Query(query): Query<RandomNameQuery>,
) -> Response
where
    L: LlmClient + 'static,
{
    let filter = match parse_filter(query.gender.as_deref()) {
        Ok(f) => f,
        Err(response) => return response,
    };
    let last_name = query.last_name.as_deref().unwrap_or_default();

    match state.name_catalog.random_full_name(filter, last_name) {
        Ok(picked) => {
            tracing::debug!(name = picked.record.name, filter = %filter, "Random name selected");
            (
                StatusCode::OK,
                Json(RandomNameResponse {
                    name: picked.record.name.to_string(),
                    meaning: picked.record.meaning.to_string(),
                    tribe: picked.record.tribe.to_string(),
                    gender: picked.record.gender,
                    full_name: picked.full_name,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Random name selection failed");
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_names_handler<L>(
    State(state): State<AppState<L>>,
    Query(query): Query<ListNamesQuery>,
) -> Response
where
    L: LlmClient + 'static,
{
    let filter = match parse_filter(query.gender.as_deref()) {
        Ok(f) => f,
        Err(response) => return response,
    };

    let candidates = match query.tribe.as_deref().map(str::trim) {
        Some(tribe) if !tribe.is_empty() => state.name_catalog.by_tribe(tribe),
        _ => state.name_catalog.records().iter().collect(),
    };

    let names: Vec<NameRecord> = candidates
        .into_iter()
        .filter(|r| filter.matches(r.gender))
        .copied()
        .collect();

    (
        StatusCode::OK,
        Json(ListNamesResponse {
            count: names.len(),
            names,
        }),
    )
        .into_response()
}
