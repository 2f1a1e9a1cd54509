//! API route modules.

pub mod auth;
pub mod health;
pub mod users;

use serde::Serialize;

/// `{ "message": ... }` body returned by mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
