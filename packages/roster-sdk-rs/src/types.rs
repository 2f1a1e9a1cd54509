//! Wire types matching the Roster server's JSON bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body for create and update.
#[derive(Debug, Clone, Serialize)]
pub struct UserInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginInput<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
