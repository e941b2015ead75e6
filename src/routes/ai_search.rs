use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    routes::AppState,
    services::{
        ai_search::{self, SearchOutcome},
        session::require_session,
    },
    views::{self, AiSearchView},
};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub outcome: SearchOutcome,
    pub view: AiSearchView,
}

/// Handler for AI search submissions
///
/// Search failures never surface as errors: the response carries the outcome
/// and the view as it stands afterwards. Only a missing session is rejected.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> AppResult<Json<SearchResponse>> {
    if require_session(state.identity.as_ref(), &state.navigator).is_none() {
        return Err(AppError::Unauthenticated);
    }

    tracing::info!(request_id = %request_id, "Processing AI search");

    let outcome = ai_search::run_search(
        &state.store,
        state.model.clone(),
        state.catalog.clone(),
        &state.search,
        &request.query,
    )
    .await;

    tracing::info!(request_id = %request_id, outcome = ?outcome, "AI search completed");

    let snapshot = state.store.snapshot().await;
    Ok(Json(SearchResponse {
        outcome,
        view: views::render_ai_search(&snapshot, &state.views),
    }))
}
