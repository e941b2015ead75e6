//! Shared application state
//!
//! The store holds four independent partitions (identity, catalog data, AI
//! search results, UI config). Every write goes through [`Store::dispatch`]
//! with a named [`Action`]; reads go through [`Store::select`] or one of the
//! typed selectors.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Language, Movie, MovieCategory, SessionUser, Video};

mod slot;

pub use slot::Slot;

/// Trailer slot, keyed by the movie it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct TrailerSlot {
    pub movie_id: u64,
    /// `Loaded(None)` means the movie has no trailer
    pub video: Slot<Option<Video>>,
}

/// Catalog partition
#[derive(Debug, Clone, Default)]
pub struct MoviesState {
    pub now_playing: Slot<Vec<Movie>>,
    pub popular: Slot<Vec<Movie>>,
    pub top_rated: Slot<Vec<Movie>>,
    pub upcoming: Slot<Vec<Movie>>,
    pub trailer: Option<TrailerSlot>,
}

impl MoviesState {
    pub fn category(&self, category: MovieCategory) -> &Slot<Vec<Movie>> {
        match category {
            MovieCategory::NowPlaying => &self.now_playing,
            MovieCategory::Popular => &self.popular,
            MovieCategory::TopRated => &self.top_rated,
            MovieCategory::Upcoming => &self.upcoming,
        }
    }

    fn category_mut(&mut self, category: MovieCategory) -> &mut Slot<Vec<Movie>> {
        match category {
            MovieCategory::NowPlaying => &mut self.now_playing,
            MovieCategory::Popular => &mut self.popular,
            MovieCategory::TopRated => &mut self.top_rated,
            MovieCategory::Upcoming => &mut self.upcoming,
        }
    }

    /// Trailer slot for `movie_id`, ignoring a slot that belongs to another movie
    pub fn trailer_for(&self, movie_id: u64) -> Option<&Slot<Option<Video>>> {
        self.trailer
            .as_ref()
            .filter(|t| t.movie_id == movie_id)
            .map(|t| &t.video)
    }
}

/// AI search partition
#[derive(Debug, Clone)]
pub struct AiSearchState {
    /// One group per suggested title, in suggestion order
    pub movie_results: Option<Vec<Vec<Movie>>>,
    pub show_welcome: bool,
}

impl Default for AiSearchState {
    fn default() -> Self {
        Self {
            movie_results: None,
            show_welcome: true,
        }
    }
}

impl AiSearchState {
    /// Results with the per-suggestion grouping discarded
    pub fn flattened(&self) -> Option<Vec<Movie>> {
        self.movie_results
            .as_ref()
            .map(|groups| groups.iter().flatten().cloned().collect())
    }
}

/// UI config partition
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub lang: Language,
}

/// Full state tree
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub user: Option<SessionUser>,
    pub movies: MoviesState,
    pub ai_search: AiSearchState,
    pub config: ConfigState,
}

/// Named mutations accepted by the store
#[derive(Debug, Clone)]
pub enum Action {
    AddUser(SessionUser),
    RemoveUser,
    /// Claims a category slot for fetching; no-op unless the slot is absent
    BeginCategoryFetch(MovieCategory),
    AddCategoryMovies(MovieCategory, Vec<Movie>),
    CategoryFetchFailed(MovieCategory, String),
    /// Claims the trailer slot for a movie; no-op if already loading or loaded
    BeginTrailerFetch(u64),
    AddTrailerVideo {
        movie_id: u64,
        video: Option<Video>,
    },
    TrailerFetchFailed {
        movie_id: u64,
        reason: String,
    },
    AddAiMovieResult(Vec<Vec<Movie>>),
    RemoveAiMovieResult,
    ShowWelcome,
    HideWelcome,
    ChangeLanguage(Language),
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::AddUser(_) => "add_user",
            Action::RemoveUser => "remove_user",
            Action::BeginCategoryFetch(_) => "begin_category_fetch",
            Action::AddCategoryMovies(..) => "add_category_movies",
            Action::CategoryFetchFailed(..) => "category_fetch_failed",
            Action::BeginTrailerFetch(_) => "begin_trailer_fetch",
            Action::AddTrailerVideo { .. } => "add_trailer_video",
            Action::TrailerFetchFailed { .. } => "trailer_fetch_failed",
            Action::AddAiMovieResult(_) => "add_ai_movie_result",
            Action::RemoveAiMovieResult => "remove_ai_movie_result",
            Action::ShowWelcome => "show_welcome",
            Action::HideWelcome => "hide_welcome",
            Action::ChangeLanguage(_) => "change_language",
        }
    }
}

impl StoreState {
    /// Applies an action, returning whether anything was written
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddUser(user) => {
                self.user = Some(user);
                true
            }
            Action::RemoveUser => self.user.take().is_some(),
            Action::BeginCategoryFetch(category) => {
                let slot = self.movies.category_mut(category);
                if slot.needs_fetch() {
                    *slot = Slot::Loading;
                    true
                } else {
                    false
                }
            }
            Action::AddCategoryMovies(category, movies) => {
                *self.movies.category_mut(category) = Slot::Loaded(movies);
                true
            }
            Action::CategoryFetchFailed(category, reason) => {
                *self.movies.category_mut(category) = Slot::Failed(reason);
                true
            }
            Action::BeginTrailerFetch(movie_id) => match &mut self.movies.trailer {
                Some(trailer) if trailer.movie_id == movie_id => {
                    if trailer.video.needs_fetch() {
                        trailer.video = Slot::Loading;
                        true
                    } else {
                        false
                    }
                }
                // A new movie evicts whatever trailer was resident
                _ => {
                    self.movies.trailer = Some(TrailerSlot {
                        movie_id,
                        video: Slot::Loading,
                    });
                    true
                }
            },
            Action::AddTrailerVideo { movie_id, video } => {
                self.write_trailer(movie_id, Slot::Loaded(video))
            }
            Action::TrailerFetchFailed { movie_id, reason } => {
                self.write_trailer(movie_id, Slot::Failed(reason))
            }
            Action::AddAiMovieResult(groups) => {
                self.ai_search.movie_results = Some(groups);
                true
            }
            Action::RemoveAiMovieResult => self.ai_search.movie_results.take().is_some(),
            Action::ShowWelcome => !std::mem::replace(&mut self.ai_search.show_welcome, true),
            Action::HideWelcome => std::mem::replace(&mut self.ai_search.show_welcome, false),
            Action::ChangeLanguage(lang) => std::mem::replace(&mut self.config.lang, lang) != lang,
        }
    }

    fn write_trailer(&mut self, movie_id: u64, video: Slot<Option<Video>>) -> bool {
        match &mut self.movies.trailer {
            Some(trailer) if trailer.movie_id == movie_id => {
                trailer.video = video;
                true
            }
            // Stale response for a movie that is no longer selected
            _ => false,
        }
    }
}

/// Shared, injectable state container
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates a store with every partition at its initial value
    pub fn new() -> Self {
        Self::with_state(StoreState::default())
    }

    /// Creates a store seeded with the given state
    pub fn with_state(state: StoreState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Applies a named mutation. Returns `true` when the state changed.
    pub async fn dispatch(&self, action: Action) -> bool {
        let name = action.name();
        let changed = {
            let mut state = self.inner.write().await;
            state.apply(action)
        };

        tracing::debug!(action = name, changed, "Store action dispatched");
        changed
    }

    /// Reads a slice of the state
    pub async fn select<R>(&self, selector: impl FnOnce(&StoreState) -> R) -> R {
        let state = self.inner.read().await;
        selector(&state)
    }

    /// Clones the whole state tree
    pub async fn snapshot(&self) -> StoreState {
        self.select(StoreState::clone).await
    }

    pub async fn user(&self) -> Option<SessionUser> {
        self.select(|s| s.user.clone()).await
    }

    pub async fn category(&self, category: MovieCategory) -> Slot<Vec<Movie>> {
        self.select(|s| s.movies.category(category).clone()).await
    }

    pub async fn ai_search(&self) -> AiSearchState {
        self.select(|s| s.ai_search.clone()).await
    }

    pub async fn language(&self) -> Language {
        self.select(|s| s.config.lang).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    fn trailer(key: &str) -> Video {
        Video {
            key: key.to_string(),
            name: None,
            site: Some("YouTube".to_string()),
            kind: "Trailer".to_string(),
        }
    }

    #[tokio::test]
    async fn test_initial_state() {
        let store = Store::new();
        let state = store.snapshot().await;

        assert_eq!(state.user, None);
        assert_eq!(state.config.lang, Language::En);
        assert!(state.ai_search.show_welcome);
        assert!(state.ai_search.movie_results.is_none());
        for category in MovieCategory::ALL {
            assert_eq!(*state.movies.category(category), Slot::NotRequested);
        }
        assert!(state.movies.trailer.is_none());
    }

    #[tokio::test]
    async fn test_add_and_remove_user() {
        let store = Store::new();
        let user = SessionUser::new("uid-1", Some("a@b.com".to_string()), None);

        assert!(store.dispatch(Action::AddUser(user.clone())).await);
        assert_eq!(store.user().await, Some(user));

        assert!(store.dispatch(Action::RemoveUser).await);
        assert_eq!(store.user().await, None);
        assert!(!store.dispatch(Action::RemoveUser).await);
    }

    #[tokio::test]
    async fn test_begin_category_fetch_claims_once() {
        let store = Store::new();

        assert!(store.dispatch(Action::BeginCategoryFetch(MovieCategory::Popular)).await);
        assert!(!store.dispatch(Action::BeginCategoryFetch(MovieCategory::Popular)).await);
        assert!(store.category(MovieCategory::Popular).await.is_loading());

        // Other categories are independent
        assert!(store.dispatch(Action::BeginCategoryFetch(MovieCategory::Upcoming)).await);
    }

    #[tokio::test]
    async fn test_failed_category_can_be_reclaimed() {
        let store = Store::new();
        store.dispatch(Action::BeginCategoryFetch(MovieCategory::TopRated)).await;
        store
            .dispatch(Action::CategoryFetchFailed(
                MovieCategory::TopRated,
                "boom".to_string(),
            ))
            .await;

        assert!(store.category(MovieCategory::TopRated).await.is_absent());
        assert!(store.dispatch(Action::BeginCategoryFetch(MovieCategory::TopRated)).await);
    }

    #[tokio::test]
    async fn test_loaded_category_is_not_reclaimed() {
        let store = Store::new();
        store
            .dispatch(Action::AddCategoryMovies(MovieCategory::NowPlaying, vec![]))
            .await;

        assert!(!store.dispatch(Action::BeginCategoryFetch(MovieCategory::NowPlaying)).await);
        assert_eq!(
            store.category(MovieCategory::NowPlaying).await,
            Slot::Loaded(vec![])
        );
    }

    #[tokio::test]
    async fn test_trailer_slot_is_keyed_by_movie() {
        let store = Store::new();

        assert!(store.dispatch(Action::BeginTrailerFetch(1)).await);
        store
            .dispatch(Action::AddTrailerVideo {
                movie_id: 1,
                video: Some(trailer("k1")),
            })
            .await;
        assert!(!store.dispatch(Action::BeginTrailerFetch(1)).await);

        // Selecting another movie replaces the resident trailer
        assert!(store.dispatch(Action::BeginTrailerFetch(2)).await);
        let state = store.snapshot().await;
        assert_eq!(state.movies.trailer_for(1), None);
        assert_eq!(state.movies.trailer_for(2), Some(&Slot::Loading));
    }

    #[tokio::test]
    async fn test_stale_trailer_response_is_dropped() {
        let store = Store::new();
        store.dispatch(Action::BeginTrailerFetch(1)).await;
        store.dispatch(Action::BeginTrailerFetch(2)).await;

        let written = store
            .dispatch(Action::AddTrailerVideo {
                movie_id: 1,
                video: Some(trailer("old")),
            })
            .await;

        assert!(!written);
        let state = store.snapshot().await;
        assert_eq!(state.movies.trailer_for(2), Some(&Slot::Loading));
    }

    #[tokio::test]
    async fn test_ai_results_flatten_in_order() {
        let store = Store::new();
        store
            .dispatch(Action::AddAiMovieResult(vec![
                vec![movie(1, "War")],
                vec![],
                vec![movie(3, "Sholay")],
            ]))
            .await;

        let flat = store.ai_search().await.flattened().unwrap();
        let titles: Vec<_> = flat.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["War", "Sholay"]);
    }

    #[tokio::test]
    async fn test_welcome_flag_changes_are_reported() {
        let store = Store::new();
        assert!(!store.dispatch(Action::ShowWelcome).await);
        assert!(store.dispatch(Action::HideWelcome).await);
        assert!(!store.dispatch(Action::HideWelcome).await);
        assert!(store.dispatch(Action::ShowWelcome).await);
    }

    #[tokio::test]
    async fn test_change_language() {
        let store = Store::new();
        assert!(store.dispatch(Action::ChangeLanguage(Language::French)).await);
        assert_eq!(store.language().await, Language::French);
        assert!(!store.dispatch(Action::ChangeLanguage(Language::French)).await);
    }
}
