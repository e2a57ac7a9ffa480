//! Column decoding shared by the repositories.

use crate::{DbError, Result as DbErrorResult};

use habit_core::{Habit, User};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub(crate) const HABIT_COLUMNS: &str = "id, owner_id, name, emoji, target_minutes_per_day, \
     progress_minutes, streak, last_completion_date, is_completed_today, version, \
     created_at, updated_at";

pub(crate) const USER_COLUMNS: &str =
    "id, fullname, email, password_hash, created_at, updated_at";

pub(crate) fn habit_from_row(row: &SqliteRow) -> DbErrorResult<Habit> {
    let last_completion_date = row
        .try_get::<Option<String>, _>("last_completion_date")?
        .map(|value| {
            Habit::parse_completion_date(&value).map_err(|e| DbError::Initialization {
                message: format!("Invalid date in habits.last_completion_date: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    Ok(Habit {
        id: uuid_column(row, "habits", "id")?,
        owner_id: uuid_column(row, "habits", "owner_id")?,
        name: row.try_get("name")?,
        emoji: row.try_get("emoji")?,
        target_minutes_per_day: row.try_get("target_minutes_per_day")?,
        progress_minutes: row.try_get("progress_minutes")?,
        streak: row.try_get("streak")?,
        last_completion_date,
        is_completed_today: row.try_get("is_completed_today")?,
        version: row.try_get("version")?,
        created_at: timestamp_column(row, "habits", "created_at")?,
        updated_at: timestamp_column(row, "habits", "updated_at")?,
    })
}

pub(crate) fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: uuid_column(row, "users", "id")?,
        fullname: row.try_get("fullname")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: timestamp_column(row, "users", "created_at")?,
        updated_at: timestamp_column(row, "users", "updated_at")?,
    })
}

fn uuid_column(row: &SqliteRow, table: &str, column: &str) -> DbErrorResult<Uuid> {
    let value: String = row.try_get(column)?;
    Uuid::parse_str(&value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}.{}: {}", table, column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn timestamp_column(row: &SqliteRow, table: &str, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let seconds: i64 = row.try_get(column)?;
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}.{}", table, column),
        location: ErrorLocation::from(Location::caller()),
    })
}
