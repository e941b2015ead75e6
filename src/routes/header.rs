use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Language,
    routes::AppState,
    services::header,
};

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub location: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub lang: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub lang: Language,
}

/// Current top-level view, as driven by navigation and the session mirror
pub async fn location(State(state): State<Arc<AppState>>) -> Json<LocationResponse> {
    Json(LocationResponse {
        location: state.navigator.current().path(),
    })
}

pub async fn toggle_ai_search(State(state): State<Arc<AppState>>) -> Json<LocationResponse> {
    let route = header::toggle_ai_search(&state.store, &state.navigator).await;
    Json(LocationResponse {
        location: route.path(),
    })
}

pub async fn change_language(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LanguageRequest>,
) -> AppResult<Json<LanguageResponse>> {
    let lang: Language = request.lang.parse().map_err(AppError::InvalidInput)?;
    header::change_language(&state.store, lang).await;
    Ok(Json(LanguageResponse { lang }))
}

pub async fn logo(State(state): State<Arc<AppState>>) -> Json<LocationResponse> {
    let route = header::logo_click(&state.store, &state.navigator).await;
    Json(LocationResponse {
        location: route.path(),
    })
}
