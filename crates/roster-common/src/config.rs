//! Application configuration loaded from environment variables and config files.
//!
//! Supports `.env` files for development and environment variables for production.
//! Config precedence: env vars > .env file > roster.toml > defaults
//!
//! The loaded [`AppConfig`] is returned by value and handed to whatever needs it.
//! Nothing here is global.

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;

/// Default config file name (without extension), resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "roster";

/// Load configuration from `file` (optional) and `ROSTER__*` environment variables.
pub fn load(file: &str) -> Result<AppConfig, ConfigError> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    defaults()?
        .add_source(config::File::with_name(file).required(false))
        // Environment variables (ROSTER__SERVER__PORT, ROSTER__AUTH__JWT_SECRET, etc.)
        .add_source(
            config::Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("database.url", "sqlite://roster.db?mode=rwc")?
        .set_default("database.max_connections", 10)?
        .set_default("database.min_connections", 1)?
        .set_default("auth.token_ttl_secs", 600) // 10 min
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// `postgres://…` or `sqlite://…` connection URL
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; an empty value is rejected at startup.
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: u64,
    /// Copied into the `iss` claim when set. Never validated.
    pub issuer: Option<String>,
    /// Copied into the `aud` claim when set. Never validated.
    pub audience: Option<String>,
}
