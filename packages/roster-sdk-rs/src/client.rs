//! High-level `RosterClient`: typed calls over [`RestClient`].

use reqwest::Method;
use serde_json::json;

use crate::error::Result;
use crate::rest::RestClient;
use crate::types::{LoginInput, LoginResponse, MessageResponse, User, UserInput};

/// The main Roster client.
#[derive(Clone)]
pub struct RosterClient {
    pub rest: RestClient,
}

impl RosterClient {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(Some(base_url))?,
        })
    }

    /// Register the hook run when the server rejects the stored token.
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.rest.set_session_hook(hook);
        self
    }

    pub fn is_logged_in(&self) -> bool {
        self.rest.token().is_some()
    }

    // ── Session ───────────────────────────────────────────────────────────────

    /// Exchange credentials for a token and keep it for later calls.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::to_value(LoginInput { username, password })?;
        let resp: LoginResponse = self.rest.public(Method::POST, "/login", Some(&body)).await?;
        self.rest.set_token(resp.token.clone());
        Ok(resp)
    }

    /// Forget the stored token. Tokens are not revocable server-side.
    pub fn logout(&self) {
        self.rest.clear_token();
    }

    // ── Users ─────────────────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.rest.protected(Method::GET, "/user", None).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.rest.protected(Method::GET, &format!("/user/{id}"), None).await
    }

    pub async fn create_user(&self, user: &UserInput<'_>) -> Result<MessageResponse> {
        self.rest
            .protected(Method::POST, "/user", Some(&json!(user)))
            .await
    }

    pub async fn update_user(&self, id: i64, user: &UserInput<'_>) -> Result<MessageResponse> {
        self.rest
            .protected(Method::PUT, &format!("/user/{id}"), Some(&json!(user)))
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<MessageResponse> {
        self.rest
            .protected(Method::DELETE, &format!("/user/{id}"), None)
            .await
    }
}
