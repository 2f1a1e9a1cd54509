//! Middleware: bearer-token authentication and security headers.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use roster_common::error::RosterError;
use std::sync::Arc;

use crate::AppState;

/// Authentication context extracted from the Authorization header.
///
/// Any valid token authorizes any user record; the subject is carried for
/// logging, not for access decisions.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
}

/// Validate `Authorization: Bearer <token>` before the wrapped handler runs.
///
/// On failure the request never reaches the handler, so nothing touches the
/// database.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, RosterError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let claims = state.validator.validate(auth_header).map_err(|kind| {
        tracing::debug!(reason = %kind, path = %request.uri().path(), "Rejected bearer token");
        RosterError::from(kind)
    })?;

    // Insert auth context into request extensions for handlers to use
    request.extensions_mut().insert(AuthContext {
        username: claims.sub,
    });

    Ok(next.run(request).await)
}

// ── Security headers ──────────────────────────────────────────────────────────

/// Add security headers to every HTTP response.
///
/// Headers applied:
/// - `X-Content-Type-Options: nosniff`: prevents MIME sniffing
/// - `X-Frame-Options: DENY`: prevents clickjacking
/// - `Referrer-Policy: no-referrer`
/// - `Cache-Control: no-store`: tokens and user records must not be cached
/// - `Content-Security-Policy`: JSON only, nothing to load or frame
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let h = response.headers_mut();

    macro_rules! set {
        ($name:expr, $val:expr) => {
            h.insert($name, axum::http::HeaderValue::from_static($val));
        };
    }

    set!(header::X_CONTENT_TYPE_OPTIONS, "nosniff");
    set!(header::X_FRAME_OPTIONS, "DENY");
    set!(header::REFERRER_POLICY, "no-referrer");
    set!(header::CACHE_CONTROL, "no-store");
    set!(
        header::CONTENT_SECURITY_POLICY,
        "default-src 'none'; frame-ancestors 'none'"
    );

    response
}
