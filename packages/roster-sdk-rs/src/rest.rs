//! Async REST transport for the Roster API.
//!
//! Owns the stored bearer token. Every request carries it when present; a
//! 401 on a protected call discards it and fires the session-expired hook.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{RosterError, Result, FALLBACK_MESSAGE};

const DEFAULT_BASE: &str = "http://localhost:8080/api";

type SessionHook = Arc<dyn Fn() + Send + Sync + 'static>;

/// Async Roster REST client.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
    on_session_expired: Option<SessionHook>,
}

impl RestClient {
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let client = Client::builder().build().map_err(RosterError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or(DEFAULT_BASE).trim_end_matches('/').to_owned(),
            token: Arc::new(RwLock::new(None)),
            on_session_expired: None,
        })
    }

    /// Called once per rejected protected request, after the token is cleared.
    /// This is where an application notifies the user and sends them back to login.
    pub fn set_session_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.on_session_expired = Some(Arc::new(hook));
    }

    // ── Token store ───────────────────────────────────────────────────────────

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    // ── Requests ──────────────────────────────────────────────────────────────

    /// Request an endpoint that needs no token (login). A 401 is an ordinary API error.
    pub async fn public<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        self.execute(method, path, body, false).await
    }

    /// Request a token-guarded endpoint. A 401 ends the session.
    pub async fn protected<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        self.execute(method, path, body, true).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        ends_session_on_401: bool,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);
        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED && ends_session_on_401 {
            self.expire_session(path);
            return Err(RosterError::SessionExpired);
        }

        if !status.is_success() {
            let message = resp
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned());
            return Err(RosterError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json::<T>().await?)
    }

    fn expire_session(&self, path: &str) {
        tracing::info!(path, "Session rejected by server, discarding token");
        self.clear_token();
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }
}
