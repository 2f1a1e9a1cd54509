//! Centralized error types for Roster.
//!
//! Uses `thiserror` for ergonomic error definitions and provides HTTP-friendly
//! error variants that convert directly into API responses.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Field name → human-readable messages for every rule that field broke.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Core application error type used across all Roster services.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    // === Auth errors ===
    /// Never says whether the username or the password was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No `Authorization` header, or one without the `Bearer ` prefix.
    #[error("Missing or invalid token")]
    MissingToken,

    /// Bad signature, expired, or structurally broken token.
    #[error("Invalid token")]
    InvalidToken,

    // === Resource errors ===
    #[error("{resource} not found")]
    NotFound { resource: String },

    // === Validation errors ===
    #[error("Validation failed: {}", join_field_errors(.fields))]
    Validation { fields: FieldErrors },

    // === Infrastructure errors ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn join_field_errors(fields: &FieldErrors) -> String {
    fields.values().flatten().cloned().collect::<Vec<_>>().join("; ")
}

/// JSON error response body sent to clients.
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl RosterError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Map error to HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::MissingToken | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error code string for programmatic handling by clients.
    pub fn error_code(&self) -> &str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't leak internal details to clients
        let message = match &self {
            RosterError::Database(e) => {
                tracing::error!("Database error: {e}");
                "An internal error occurred".to_string()
            }
            RosterError::Internal(e) => {
                tracing::error!("Internal error: {e}");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            error: self.error_code().to_string(),
            message,
            errors: match self {
                RosterError::Validation { fields } => Some(fields),
                _ => None,
            },
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience type alias for Results using RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
