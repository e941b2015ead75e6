//! Mirrors the identity provider's session into the store
//!
//! The provider pushes session transitions; the mirror writes them into the
//! identity partition and drives navigation. A subscription is a handle that
//! owns the listening task and stops it when released or dropped.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    models::{Language, SessionUser},
    services::{
        navigation::{Navigator, Route},
        providers::IdentityProvider,
    },
    store::{Action, Store},
};

/// Applies one session notification
///
/// A new session populates the identity slot and leaves the entry view for
/// browse. An ended session clears identity and AI results, shows the welcome
/// message, restores the default language and returns to the entry view.
pub async fn apply_session_change(store: &Store, navigator: &Navigator, user: Option<SessionUser>) {
    match user {
        Some(user) => {
            tracing::info!(uid = %user.uid, "Session started");
            store.dispatch(Action::AddUser(user)).await;
            if navigator.current() == Route::Entry {
                navigator.navigate(Route::Browse);
            }
        }
        None => {
            tracing::info!("Session ended");
            store.dispatch(Action::RemoveUser).await;
            store.dispatch(Action::RemoveAiMovieResult).await;
            store.dispatch(Action::ShowWelcome).await;
            store
                .dispatch(Action::ChangeLanguage(Language::default()))
                .await;
            navigator.navigate(Route::Entry);
        }
    }
}

/// Session gate for the signed-in views
///
/// Reads the provider's current session the way a fresh subscriber would. When
/// nobody is signed in the navigator is sent back to the entry view and `None`
/// is returned, so callers skip their fetch hooks.
pub fn require_session(
    identity: &dyn IdentityProvider,
    navigator: &Navigator,
) -> Option<SessionUser> {
    let user = identity.subscribe().borrow().clone();
    if user.is_none() {
        tracing::info!(from = navigator.current().path(), "No session, returning to entry");
        navigator.navigate(Route::Entry);
    }
    user
}

/// Live subscription to session-change notifications
pub struct SessionSubscription {
    task: Option<JoinHandle<()>>,
}

impl SessionSubscription {
    /// Subscribes to `identity` and mirrors every notification until released
    pub fn spawn(identity: Arc<dyn IdentityProvider>, store: Store, navigator: Navigator) -> Self {
        let mut session_rx = identity.subscribe();

        let task = tokio::spawn(async move {
            tracing::info!("Session mirror started");
            while session_rx.changed().await.is_ok() {
                let user = session_rx.borrow_and_update().clone();
                apply_session_change(&store, &navigator, user).await;
            }
            tracing::info!("Session mirror stopped: provider closed");
        });

        Self { task: Some(task) }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops listening and waits for the task to wind down
    pub async fn release(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            tracing::info!("Session subscription released");
        }
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
