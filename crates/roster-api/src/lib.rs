//! # roster-api
//!
//! REST API layer for Roster: login, token-guarded user CRUD, and health.

pub mod auth;
pub mod extract;
pub mod middleware;
pub mod routes;

use axum::Router;
use roster_common::config::AuthConfig;
use roster_db::Database;
use std::sync::Arc;

use crate::auth::{AuthConfigError, TokenIssuer, TokenValidator};

/// Shared application state available to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Mints tokens after a successful credential check.
    pub issuer: TokenIssuer,
    /// Guards every `/api/user` route.
    pub validator: TokenValidator,
}

impl AppState {
    /// Fails when the signing secret is unusable, before anything is served.
    pub fn new(db: Database, auth: &AuthConfig) -> Result<Self, AuthConfigError> {
        let (issuer, validator) = auth::from_config(auth)?;
        Ok(Self {
            db,
            issuer,
            validator,
        })
    }
}

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    let api_routes = Router::new()
        .merge(routes::auth::router())
        .merge(routes::users::router(state.clone()))
        .merge(routes::health::router());

    Router::new()
        .nest("/api", api_routes)
        // The SPA is served from a different origin
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::compression::CompressionLayer::new())
        .with_state(state)
}
