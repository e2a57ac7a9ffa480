use crate::repositories::row::{USER_COLUMNS, user_from_row};
use crate::{DbError, Result as DbErrorResult};

use habit_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    /// Insert a user. A taken email yields `DbError::Conflict`.
    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO users (id, fullname, email, password_hash, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.fullname)
        .bind(User::normalize_email(&user.email))
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(executor)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(DbError::Conflict {
                message: "email already registered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Case-insensitive lookup
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(User::normalize_email(email))
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }
}
