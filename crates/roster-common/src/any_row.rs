//! Manual `sqlx::FromRow<'_, sqlx::any::AnyRow>` implementations for the
//! roster-common record types.
//!
//! The repository layer talks to PostgreSQL and SQLite through one
//! `sqlx::AnyPool`, which only decodes primitives (i64, f64, bool, String,
//! bytes). Ids are `INTEGER`/`BIGINT` columns and decode as `i64` on both.

use sqlx::{any::AnyRow, FromRow, Row};

use crate::models::{login::Login, user::User};

impl FromRow<'_, AnyRow> for Login {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
        })
    }
}

impl FromRow<'_, AnyRow> for User {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
        })
    }
}
