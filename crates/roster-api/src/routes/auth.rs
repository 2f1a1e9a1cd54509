//! Authentication route: login.
//!
//! Checks a username/password pair against the `logins` table and, on a
//! match, hands back a bearer token. Unknown user and wrong password produce
//! the same response.

use axum::{extract::State, routing::post, Json, Router};
use roster_common::{
    error::{RosterError, RosterResult},
    models::login::LoginRequest,
    validation::validate_request,
};
use roster_db::repository::logins;
use serde::Serialize;
use std::sync::Arc;

use crate::{extract::JsonBody, AppState};

/// Auth router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: &'static str,
}

/// POST /api/login
///
/// Authenticate with username + password. Returns a JWT.
async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> RosterResult<Json<LoginResponse>> {
    validate_request(&body)?;
    let (username, password) = body.credentials();

    let Some(login) = logins::find_by_username(&state.db.pool, username)
        .await?
        .filter(|l| l.password_matches(password))
    else {
        tracing::info!("Login rejected");
        return Err(RosterError::InvalidCredentials);
    };

    let token = state
        .issuer
        .issue(&login.username)
        .map_err(|e| RosterError::Internal(e.into()))?;

    tracing::info!(username = %login.username, "User logged in");

    Ok(Json(LoginResponse {
        token,
        message: "Login successful",
    }))
}
