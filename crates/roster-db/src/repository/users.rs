//! User repository: CRUD operations for user records.

use roster_common::models::user::User;
use sqlx::AnyPool;

/// Create a new user record.
pub async fn create_user(pool: &AnyPool, name: &str, email: &str) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email)
        VALUES ($1, $2)
        RETURNING id, name, email
        "#,
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await
}

/// Find a user by id.
pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List every user, oldest first.
pub async fn list_users(pool: &AnyPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Overwrite name and email. Returns `None` if no such user.
pub async fn update_user(
    pool: &AnyPool,
    id: i64,
    name: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            name = $2,
            email = $3
        WHERE id = $1
        RETURNING id, name, email
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Delete a user. Returns whether a row was removed.
pub async fn delete_user(pool: &AnyPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;

    #[tokio::test]
    async fn crud_round_trip() {
        let db = memory_db().await;

        let created = create_user(&db.pool, "Alice", "alice@example.com").await.unwrap();
        assert_eq!(find_by_id(&db.pool, created.id).await.unwrap(), Some(created.clone()));

        let updated = update_user(&db.pool, created.id, "Alicia", "alicia@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Alicia");

        create_user(&db.pool, "Bob", "bob@example.com").await.unwrap();
        let all = list_users(&db.pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, created.id);

        assert!(delete_user(&db.pool, created.id).await.unwrap());
        assert!(!delete_user(&db.pool, created.id).await.unwrap());
        assert!(find_by_id(&db.pool, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_of_missing_user_is_none() {
        let db = memory_db().await;
        assert!(update_user(&db.pool, 42, "x", "x@example.com").await.unwrap().is_none());
    }
}
