//! External service abstractions
//!
//! The application talks to three hosted services: a movie catalog, a
//! generative-text model and an identity provider. Each sits behind a trait so
//! the orchestration code can be exercised against mocks.

use tokio::sync::watch;

use crate::{
    error::AppResult,
    models::{Movie, MovieCategory, SessionUser, Video},
    services::auth::AuthError,
};

pub mod firebase;
pub mod gemini;
pub mod tmdb;

pub use firebase::FirebaseIdentity;
pub use gemini::GeminiModel;
pub use tmdb::TmdbCatalog;

/// Read-only movie catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the single fixed page of a curated category
    async fn list_category(&self, category: MovieCategory) -> AppResult<Vec<Movie>>;

    /// Fetch every video attached to a movie
    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<Video>>;

    /// Free-text title search, ranked by the catalog
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Free-text completion service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Returns the completion text for `prompt`
    async fn generate(&self, model: &str, prompt: &str) -> AppResult<String>;
}

/// Hosted authentication service
///
/// Session changes are pushed through a watch channel. A fresh receiver
/// observes the current session immediately.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Subscribe to session-change notifications
    fn subscribe(&self) -> watch::Receiver<Option<SessionUser>>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;

    /// Create an account and set its display name
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<SessionUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
