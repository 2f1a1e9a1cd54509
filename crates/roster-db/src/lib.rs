//! # roster-db
//!
//! Database layer for Roster. One `sqlx::AnyPool` backs two tables:
//! - **logins**: credential pairs checked at login
//! - **users**: records managed by the protected CRUD endpoints
//!
//! PostgreSQL is the production backend; SQLite serves local runs and tests.

pub mod repository;

use anyhow::Result;
use roster_common::config::DatabaseConfig;
use sqlx::{any::AnyPoolOptions, migrate::Migrator, AnyPool};

static POSTGRES_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/postgres");
static SQLITE_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/sqlite");

/// Which SQL dialect sits behind the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self> {
        if url.starts_with("postgres:") || url.starts_with("postgresql:") {
            Ok(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            anyhow::bail!("unsupported database URL scheme (expected postgres:// or sqlite:)")
        }
    }
}

/// Shared database state passed through Axum extractors.
#[derive(Clone)]
pub struct Database {
    pub pool: AnyPool,
    pub backend: Backend,
}

impl Database {
    /// Open the connection pool.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        sqlx::any::install_default_drivers();
        let backend = Backend::from_url(&config.url)?;

        tracing::info!(?backend, "Connecting to database...");
        let mut options = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);

        // Every connection to `sqlite::memory:` is its own database; never recycle it.
        if config.url.contains(":memory:") {
            options = options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options.connect(&config.url).await?;
        tracing::info!(?backend, "Connected to database");

        Ok(Self { pool, backend })
    }

    /// Run database migrations for the active backend.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");
        match self.backend {
            Backend::Postgres => POSTGRES_MIGRATIONS.run(&self.pool).await?,
            Backend::Sqlite => SQLITE_MIGRATIONS.run(&self.pool).await?,
        }
        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Health check: verify the database is reachable.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub async fn memory_db() -> Database {
        let db = Database::connect(&DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
        })
        .await
        .unwrap();
        db.migrate().await.unwrap();
        db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_is_picked_from_the_url_scheme() {
        assert_eq!(Backend::from_url("postgres://u@h/db").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert!(Backend::from_url("mssql://h/db").is_err());
    }

    #[tokio::test]
    async fn in_memory_database_migrates_and_answers() {
        let db = test_support::memory_db().await;
        assert!(db.health_check().await);
        // Running twice is a no-op
        db.migrate().await.unwrap();
    }
}
