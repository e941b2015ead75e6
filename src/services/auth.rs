use std::sync::Arc;

use crate::{
    error::AppResult,
    models::SessionUser,
    services::{
        providers::IdentityProvider,
        validation::{check_credentials, check_valid_data},
    },
};

/// Identity provider failures, keyed by the provider's error code
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("auth/email-already-in-use")]
    EmailAlreadyInUse,

    #[error("auth/invalid-email")]
    InvalidEmail,

    #[error("auth/weak-password")]
    WeakPassword,

    #[error("auth/user-not-found")]
    UserNotFound,

    #[error("auth/invalid-credential")]
    InvalidCredential,

    /// Unmapped provider code or transport failure
    #[error("{0}")]
    Other(String),
}

impl AuthError {
    /// Text shown to the user for this error
    pub fn friendly_message(&self) -> &'static str {
        match self {
            AuthError::EmailAlreadyInUse => "This email is already registered. Please sign in.",
            AuthError::InvalidEmail => "Please enter a valid email address.",
            AuthError::WeakPassword => "Password should be at least 6 characters.",
            AuthError::UserNotFound => "No account found with this email.",
            AuthError::InvalidCredential => "Incorrect password. Please try again.",
            AuthError::Other(_) => "An error occurred. Please try again.",
        }
    }
}

fn log_unmapped(err: &AuthError) {
    if let AuthError::Other(detail) = err {
        tracing::error!(error = %detail, "Authentication error");
    }
}

/// Validates the sign-in form and signs the user in
pub async fn sign_in(
    identity: Arc<dyn IdentityProvider>,
    email: &str,
    password: &str,
) -> AppResult<SessionUser> {
    if let Some(err) = check_credentials(email, password) {
        return Err(err.into());
    }

    identity.sign_in(email, password).await.map_err(|e| {
        log_unmapped(&e);
        e.into()
    })
}

/// Validates the sign-up form and creates the account with its display name
pub async fn sign_up(
    identity: Arc<dyn IdentityProvider>,
    name: &str,
    email: &str,
    password: &str,
) -> AppResult<SessionUser> {
    if let Some(err) = check_valid_data(email, password, name) {
        return Err(err.into());
    }

    identity.sign_up(email, password, name).await.map_err(|e| {
        log_unmapped(&e);
        e.into()
    })
}

/// Ends the session. Failures are logged and otherwise ignored.
pub async fn sign_out(identity: Arc<dyn IdentityProvider>) {
    if let Err(e) = identity.sign_out().await {
        tracing::error!(error = %e, "Sign out error");
    }
}
