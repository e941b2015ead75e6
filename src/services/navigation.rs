use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Sign in / sign up
    Entry,
    Browse,
    AiSearch,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Entry => "/",
            Route::Browse => "/browse",
            Route::AiSearch => "/browse/ai-search",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(Route::Entry),
            "/browse" => Some(Route::Browse),
            "/browse/ai-search" => Some(Route::AiSearch),
            _ => None,
        }
    }
}

/// Tracks which top-level view is active
#[derive(Clone)]
pub struct Navigator {
    current: Arc<watch::Sender<Route>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        let (current, _) = watch::channel(Route::Entry);
        Self {
            current: Arc::new(current),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    pub fn navigate(&self, route: Route) {
        let previous = self.current.send_replace(route);
        if previous != route {
            tracing::debug!(from = previous.path(), to = route.path(), "Navigated");
        }
    }
}
