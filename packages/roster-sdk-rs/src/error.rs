//! Error types for the Roster SDK.

use thiserror::Error;

/// Shown when the server gave no usable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Try again.";

#[derive(Debug, Error)]
pub enum RosterError {
    /// A protected call was refused with 401. The stored token has already
    /// been discarded and the session-expired hook has run; callers should
    /// not report this again.
    #[error("Session expired. Please log in again.")]
    SessionExpired,

    /// The HTTP response had a non-2xx status code.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// An error from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    /// Whether the caller still owes the user a notification.
    pub fn should_surface(&self) -> bool {
        !matches!(self, Self::SessionExpired)
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
