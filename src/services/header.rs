//! Header actions: AI search toggle, language selector and logo

use crate::{
    models::Language,
    services::navigation::{Navigator, Route},
    store::{Action, Store},
};

/// Switches between browse and AI search
///
/// Clears AI results, shows the welcome message and resets the language
/// before navigating. These are separate store writes.
pub async fn toggle_ai_search(store: &Store, navigator: &Navigator) -> Route {
    store.dispatch(Action::RemoveAiMovieResult).await;
    store.dispatch(Action::ShowWelcome).await;
    store
        .dispatch(Action::ChangeLanguage(Language::default()))
        .await;

    let target = match navigator.current() {
        Route::AiSearch => Route::Browse,
        _ => Route::AiSearch,
    };
    navigator.navigate(target);
    target
}

pub async fn change_language(store: &Store, lang: Language) {
    store.dispatch(Action::ChangeLanguage(lang)).await;
}

/// Returns to browse, except from the entry view where it does nothing
pub async fn logo_click(store: &Store, navigator: &Navigator) -> Route {
    if navigator.current() == Route::Entry {
        return Route::Entry;
    }

    store.dispatch(Action::RemoveAiMovieResult).await;
    store.dispatch(Action::ShowWelcome).await;
    navigator.navigate(Route::Browse);
    Route::Browse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toggle_restores_default_language() {
        for lang in Language::ALL {
            let store = Store::new();
            let navigator = Navigator::new();
            navigator.navigate(Route::Browse);
            change_language(&store, lang).await;

            toggle_ai_search(&store, &navigator).await;
            assert_eq!(store.language().await, Language::En);
        }
    }

    #[tokio::test]
    async fn test_toggle_flips_between_views() {
        let store = Store::new();
        let navigator = Navigator::new();
        navigator.navigate(Route::Browse);

        assert_eq!(toggle_ai_search(&store, &navigator).await, Route::AiSearch);
        assert_eq!(toggle_ai_search(&store, &navigator).await, Route::Browse);
        assert_eq!(navigator.current(), Route::Browse);
    }

    #[tokio::test]
    async fn test_toggle_clears_results_and_shows_welcome() {
        let store = Store::new();
        let navigator = Navigator::new();
        store.dispatch(Action::AddAiMovieResult(vec![vec![]])).await;
        store.dispatch(Action::HideWelcome).await;

        toggle_ai_search(&store, &navigator).await;

        let ai = store.ai_search().await;
        assert!(ai.movie_results.is_none());
        assert!(ai.show_welcome);
    }

    #[tokio::test]
    async fn test_logo_is_ignored_on_entry() {
        let store = Store::new();
        let navigator = Navigator::new();
        store.dispatch(Action::HideWelcome).await;

        assert_eq!(logo_click(&store, &navigator).await, Route::Entry);
        assert!(!store.ai_search().await.show_welcome);
    }

    #[tokio::test]
    async fn test_logo_returns_to_browse() {
        let store = Store::new();
        let navigator = Navigator::new();
        navigator.navigate(Route::AiSearch);
        store.dispatch(Action::ChangeLanguage(Language::German)).await;

        assert_eq!(logo_click(&store, &navigator).await, Route::Browse);
        assert_eq!(navigator.current(), Route::Browse);
        // The logo leaves the language alone
        assert_eq!(store.language().await, Language::German);
    }
}
