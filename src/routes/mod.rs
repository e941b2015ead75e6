use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{
        ai_search::{AiSearchSettings, TitleMatch},
        navigation::Navigator,
        providers::{
            CatalogProvider, FirebaseIdentity, GeminiModel, GenerativeModel, IdentityProvider,
            TmdbCatalog,
        },
    },
    store::Store,
    views::ViewSettings,
};

pub mod ai_search;
pub mod auth;
pub mod header;
pub mod pages;

/// Shared application state
///
/// One store and one navigator stand in for the single browser session the
/// application serves.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub navigator: Navigator,
    pub catalog: Arc<dyn CatalogProvider>,
    pub model: Arc<dyn GenerativeModel>,
    pub identity: Arc<dyn IdentityProvider>,
    pub search: AiSearchSettings,
    pub views: ViewSettings,
}

impl AppState {
    /// Wires the hosted-service clients described by `config`
    pub fn from_config(config: &Config) -> Self {
        let catalog =
            TmdbCatalog::new(config.tmdb_access_token.clone(), config.tmdb_api_url.clone());
        let model = GeminiModel::new(config.gemini_api_key.clone(), config.gemini_api_url.clone());
        let identity =
            FirebaseIdentity::new(config.firebase_api_key.clone(), config.identity_api_url.clone());

        let title_match = if config.case_insensitive_title_match {
            TitleMatch::CaseInsensitive
        } else {
            TitleMatch::Verbatim
        };

        Self {
            store: Store::new(),
            navigator: Navigator::new(),
            catalog: Arc::new(catalog),
            model: Arc::new(model),
            identity: Arc::new(identity),
            search: AiSearchSettings {
                model: config.gemini_model.clone(),
                title_match,
            },
            views: ViewSettings {
                image_cdn_url: config.image_cdn_url.clone(),
                background_url: config.background_image_url.clone(),
            },
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(pages::entry))
        .route("/browse", get(pages::browse))
        .route("/browse/ai-search", get(pages::ai_search))
        .nest("/api/v1", api_routes())
        .fallback(pages::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// Action routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/sign-in", post(auth::sign_in))
        .route("/auth/sign-up", post(auth::sign_up))
        .route("/auth/sign-out", post(auth::sign_out))
        .route("/ai-search", post(ai_search::search))
        .route("/header/toggle-ai-search", post(header::toggle_ai_search))
        .route("/header/language", post(header::change_language))
        .route("/header/logo", post(header::logo))
        .route("/location", get(header::location))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
