//! Authentication API endpoints.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use super::{success, ApiResult};
use crate::auth::{self, Session};
use crate::errors::AppError;
use crate::AppState;

/// Request body for sign-in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - Sign in with the admin credential pair.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Session> {
    let mut invalid = Vec::new();
    if !request.email.contains('@') {
        invalid.push("email".to_string());
    }
    if request.password.is_empty() {
        invalid.push("password".to_string());
    }
    if !invalid.is_empty() {
        return Err(AppError::Validation {
            message: "Please enter a valid email and password".to_string(),
            fields: invalid,
        });
    }

    if !auth::check_credentials(&state.config, &request.email, &request.password) {
        tracing::warn!("Rejected sign-in attempt");
        return Err(AppError::InvalidCredentials);
    }

    let session = state.sessions.issue(&request.email);
    tracing::info!("Admin signed in");
    success(session)
}

/// GET /api/auth/session - The caller's current session, or null when the
/// token is missing, unknown, or expired. The null case is the confirmed
/// signal for the frontend to redirect to the login page.
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Option<Session>> {
    let session = auth::bearer_token(&headers).and_then(|token| state.sessions.get(&token));
    success(session)
}

/// POST /api/auth/logout - Clear the caller's session. Idempotent.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    if let Some(token) = auth::bearer_token(&headers) {
        state.sessions.revoke(&token);
        tracing::info!("Admin signed out");
    }
    success(())
}
