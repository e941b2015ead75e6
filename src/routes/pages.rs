use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    routes::AppState,
    services::{catalog, navigation::Route, session::require_session},
    views::{self, EntryView, ErrorView, FormMode},
};

#[derive(Debug, Default, Deserialize)]
pub struct EntryQuery {
    #[serde(default)]
    pub mode: FormMode,
}

async fn entry_view(state: &AppState, mode: FormMode) -> Json<EntryView> {
    let snapshot = state.store.snapshot().await;
    Json(views::render_entry(&snapshot, &state.views, mode))
}

/// Entry view: sign in / sign up
pub async fn entry(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EntryQuery>,
) -> Json<EntryView> {
    state.navigator.navigate(Route::Entry);
    entry_view(&state, query.mode).await
}

/// Browse view. Activating it runs the category and trailer hooks.
///
/// Signed-out visitors get the entry view instead and nothing is fetched.
pub async fn browse(State(state): State<Arc<AppState>>) -> Response {
    if require_session(state.identity.as_ref(), &state.navigator).is_none() {
        return entry_view(&state, FormMode::SignIn).await.into_response();
    }

    state.navigator.navigate(Route::Browse);
    catalog::activate_browse(&state.store, state.catalog.clone()).await;

    let snapshot = state.store.snapshot().await;
    Json(views::render_browse(&snapshot, &state.views)).into_response()
}

pub async fn ai_search(State(state): State<Arc<AppState>>) -> Response {
    if require_session(state.identity.as_ref(), &state.navigator).is_none() {
        return entry_view(&state, FormMode::SignIn).await.into_response();
    }

    state.navigator.navigate(Route::AiSearch);
    let snapshot = state.store.snapshot().await;
    Json(views::render_ai_search(&snapshot, &state.views)).into_response()
}

/// Catch-all error view
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorView>) {
    tracing::debug!(path = %uri.path(), "No route matched");
    let view = ErrorView::new(
        StatusCode::NOT_FOUND.as_u16(),
        "Not Found",
        Some(format!("No route matches {}", uri.path())),
    );
    (StatusCode::NOT_FOUND, Json(view))
}
