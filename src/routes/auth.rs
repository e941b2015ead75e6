use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{error::AppResult, models::SessionUser, routes::AppState, services::auth};

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: SessionUser,
}

/// Handler for the sign-in form
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignInRequest>,
) -> AppResult<Json<SessionResponse>> {
    let user = auth::sign_in(state.identity.clone(), &request.email, &request.password).await?;
    Ok(Json(SessionResponse { user }))
}

/// Handler for the sign-up form
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignUpRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let user = auth::sign_up(
        state.identity.clone(),
        &request.name,
        &request.email,
        &request.password,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(SessionResponse { user })))
}

pub async fn sign_out(State(state): State<Arc<AppState>>) -> StatusCode {
    auth::sign_out(state.identity.clone()).await;
    StatusCode::NO_CONTENT
}
