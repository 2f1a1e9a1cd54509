//! Login repository: credential lookups for the token issuer.
//!
//! Passwords are stored and compared as plaintext. Known weakness; any change
//! needs a migration of existing rows and is deliberately not done here.

use roster_common::models::login::Login;
use sqlx::AnyPool;

/// Find a credential record by exact (case-sensitive) username.
pub async fn find_by_username(pool: &AnyPool, username: &str) -> Result<Option<Login>, sqlx::Error> {
    sqlx::query_as::<_, Login>("SELECT id, username, password FROM logins WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Insert a credential pair. Used by the `add-login` CLI command.
pub async fn create_login(pool: &AnyPool, username: &str, password: &str) -> Result<Login, sqlx::Error> {
    sqlx::query_as::<_, Login>(
        r#"
        INSERT INTO logins (username, password)
        VALUES ($1, $2)
        RETURNING id, username, password
        "#,
    )
    .bind(username)
    .bind(password)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let db = memory_db().await;
        create_login(&db.pool, "alice", "secret").await.unwrap();

        let found = find_by_username(&db.pool, "alice").await.unwrap().unwrap();
        assert_eq!(found.username, "alice");
        assert!(found.password_matches("secret"));

        assert!(find_by_username(&db.pool, "Alice").await.unwrap().is_none());
        assert!(find_by_username(&db.pool, "bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let db = memory_db().await;
        create_login(&db.pool, "alice", "one").await.unwrap();
        assert!(create_login(&db.pool, "alice", "two").await.is_err());
    }
}
