//! Fetch-once hooks for the catalog partition
//!
//! Each hook claims its store slot before requesting, so a slot that is
//! already loading or loaded costs no outbound request. A failed request marks
//! the slot failed, which counts as absent on the next activation.

use std::sync::Arc;

use crate::{
    models::{MovieCategory, Video},
    services::providers::CatalogProvider,
    store::{Action, Store},
};

/// What a single hook activation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Slot was loading or loaded; nothing was requested
    Skipped,
    Fetched,
    Failed,
}

/// Fetches a category list unless the store already has it
///
/// The request and its store write run in their own task, so a caller that is
/// dropped mid-fetch never strands the slot in `Loading`.
pub async fn ensure_category(
    store: &Store,
    catalog: Arc<dyn CatalogProvider>,
    category: MovieCategory,
) -> FetchOutcome {
    if !store.dispatch(Action::BeginCategoryFetch(category)).await {
        return FetchOutcome::Skipped;
    }

    let task_store = store.clone();
    let task = tokio::spawn(async move {
        match catalog.list_category(category).await {
            Ok(movies) => {
                task_store
                    .dispatch(Action::AddCategoryMovies(category, movies))
                    .await;
                FetchOutcome::Fetched
            }
            Err(e) => {
                tracing::error!(
                    category = %category,
                    provider = catalog.name(),
                    error = %e,
                    "Failed to fetch movie category"
                );
                task_store
                    .dispatch(Action::CategoryFetchFailed(category, e.to_string()))
                    .await;
                FetchOutcome::Failed
            }
        }
    });

    match task.await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(category = %category, error = %e, "Category fetch task failed");
            store
                .dispatch(Action::CategoryFetchFailed(category, e.to_string()))
                .await;
            FetchOutcome::Failed
        }
    }
}

/// First video of kind "Trailer", if any
pub fn pick_trailer(videos: Vec<Video>) -> Option<Video> {
    videos.into_iter().find(Video::is_trailer)
}

/// Fetches the trailer for `movie_id` unless the store already holds it
pub async fn ensure_trailer(
    store: &Store,
    catalog: Arc<dyn CatalogProvider>,
    movie_id: u64,
) -> FetchOutcome {
    if !store.dispatch(Action::BeginTrailerFetch(movie_id)).await {
        return FetchOutcome::Skipped;
    }

    let task_store = store.clone();
    let task = tokio::spawn(async move {
        match catalog.movie_videos(movie_id).await {
            Ok(videos) => {
                let video = pick_trailer(videos);
                if video.is_none() {
                    tracing::debug!(movie_id, "Movie has no trailer");
                }
                task_store
                    .dispatch(Action::AddTrailerVideo { movie_id, video })
                    .await;
                FetchOutcome::Fetched
            }
            Err(e) => {
                tracing::error!(movie_id, error = %e, "Failed to fetch movie trailer");
                task_store
                    .dispatch(Action::TrailerFetchFailed {
                        movie_id,
                        reason: e.to_string(),
                    })
                    .await;
                FetchOutcome::Failed
            }
        }
    });

    match task.await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(movie_id, error = %e, "Trailer fetch task failed");
            store
                .dispatch(Action::TrailerFetchFailed {
                    movie_id,
                    reason: e.to_string(),
                })
                .await;
            FetchOutcome::Failed
        }
    }
}

/// Activates the browse view: all four category hooks run concurrently, then
/// the trailer hook runs for the featured (first now-playing) movie.
pub async fn activate_browse(store: &Store, catalog: Arc<dyn CatalogProvider>) {
    let [now_playing, popular, top_rated, upcoming] = MovieCategory::ALL;

    let outcomes = tokio::join!(
        ensure_category(store, catalog.clone(), now_playing),
        ensure_category(store, catalog.clone(), popular),
        ensure_category(store, catalog.clone(), top_rated),
        ensure_category(store, catalog.clone(), upcoming),
    );
    tracing::debug!(?outcomes, "Browse categories activated");

    let featured = store
        .select(|s| {
            s.movies
                .now_playing
                .loaded()
                .and_then(|movies| movies.first())
                .map(|movie| movie.id)
        })
        .await;

    if let Some(movie_id) = featured {
        ensure_trailer(store, catalog, movie_id).await;
    }
}
