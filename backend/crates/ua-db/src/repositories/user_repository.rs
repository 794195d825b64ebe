//! PostgreSQL-backed user repository.

use crate::{DbError, Result as DbErrorResult, UserStore};

use ua_core::{NewUser, User};

use std::panic::Location;

use async_trait::async_trait;
use chrono::NaiveDate;
use error_location::ErrorLocation;
use sqlx::{FromRow, PgPool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    name: String,
    dob: NaiveDate,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.name, row.dob)
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, user: &NewUser) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (name, dob)
                VALUES ($1, $2)
                RETURNING id, name, dob
            "#,
        )
        .bind(user.name())
        .bind(user.dob())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, dob
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::from).ok_or_else(|| DbError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, dob
                FROM users
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i32, user: &NewUser) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                UPDATE users
                SET name = $2, dob = $3
                WHERE id = $1
                RETURNING id, name, dob
            "#,
        )
        .bind(id)
        .bind(user.name())
        .bind(user.dob())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::from).ok_or_else(|| DbError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn delete(&self, id: i32) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
