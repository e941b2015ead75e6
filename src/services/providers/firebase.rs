/// Firebase Authentication provider (Identity Toolkit REST API)
///
/// Email/password accounts only. The provider keeps the current session in a
/// watch channel and publishes every transition to subscribers, the same way
/// the hosted SDK notifies auth-state listeners.
///
/// API Flow:
/// 1. Sign in: /accounts:signInWithPassword
/// 2. Sign up: /accounts:signUp, then /accounts:update to set the display name
/// 3. Sign out: local only, publishes the empty session
use crate::{
    models::SessionUser,
    services::{auth::AuthError, providers::IdentityProvider},
};
use reqwest::Client as HttpClient;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
}

impl From<AccountResponse> for SessionUser {
    fn from(account: AccountResponse) -> Self {
        // The REST API reports a missing display name as an empty string
        let display_name = account.display_name.filter(|name| !name.is_empty());
        SessionUser::new(account.local_id, account.email, display_name)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Maps an Identity Toolkit error message to the SDK-style error code
///
/// Messages may carry a detail suffix, e.g.
/// `WEAK_PASSWORD : Password should be at least 6 characters`.
fn map_identity_error(message: &str) -> AuthError {
    let code = message.split(" : ").next().unwrap_or(message).trim();
    match code {
        "EMAIL_EXISTS" => AuthError::EmailAlreadyInUse,
        "INVALID_EMAIL" => AuthError::InvalidEmail,
        "WEAK_PASSWORD" => AuthError::WeakPassword,
        "EMAIL_NOT_FOUND" => AuthError::UserNotFound,
        "INVALID_LOGIN_CREDENTIALS" => AuthError::InvalidCredential,
        // Legacy projects report a wrong password separately; it has no friendly text
        "INVALID_PASSWORD" => AuthError::Other("auth/wrong-password".to_string()),
        other => AuthError::Other(format!("auth/{}", other.to_lowercase().replace('_', "-"))),
    }
}

pub struct FirebaseIdentity {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    session: watch::Sender<Option<SessionUser>>,
}

impl FirebaseIdentity {
    pub fn new(api_key: String, api_url: String) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// POSTs to an `accounts:*` endpoint and decodes the account payload
    async fn post_account<B, T>(&self, method: &str, body: &B) -> Result<T, AuthError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}/accounts:{}", self.api_url, method);

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Other(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => map_identity_error(&envelope.error.message),
                Err(_) => AuthError::Other(format!(
                    "Identity API returned status {}: {}",
                    status, body
                )),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::Other(format!("Failed to parse identity response: {}", e)))
    }

    fn publish(&self, user: Option<SessionUser>) {
        self.session.send_replace(user);
    }
}

#[async_trait::async_trait]
impl IdentityProvider for FirebaseIdentity {
    fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        let mut rx = self.session.subscribe();
        // New listeners are told about the current session straight away
        rx.mark_changed();
        rx
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };

        let account: AccountResponse = self.post_account("signInWithPassword", &request).await?;
        let user = SessionUser::from(account);

        tracing::info!(uid = %user.uid, "User signed in");
        self.publish(Some(user.clone()));
        Ok(user)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<SessionUser, AuthError> {
        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };

        let account: AccountResponse = self.post_account("signUp", &request).await?;
        let id_token = account
            .id_token
            .clone()
            .ok_or_else(|| AuthError::Other("Sign-up response missing ID token".to_string()))?;

        let update = UpdateProfileRequest {
            id_token: &id_token,
            display_name,
            return_secure_token: false,
        };
        let updated: AccountResponse = self.post_account("update", &update).await?;

        let user = SessionUser::new(
            account.local_id,
            updated.email.or(account.email),
            Some(display_name.to_string()),
        );

        tracing::info!(uid = %user.uid, "User signed up");
        self.publish(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.publish(None);
        tracing::info!("User signed out");
        Ok(())
    }
}
