//! Habit persistence.
//!
//! Every read and write that originates from a request is scoped by
//! `owner_id`; a habit owned by someone else is indistinguishable from a
//! missing one. Writes to progress state go through `update_if_version`,
//! which only succeeds when the row still carries the version the caller
//! read.

use crate::repositories::row::{HABIT_COLUMNS, habit_from_row};
use crate::Result as DbErrorResult;

use habit_core::Habit;

use uuid::Uuid;

pub struct HabitRepository;

impl HabitRepository {
    pub async fn create<'e, E>(executor: E, habit: &Habit) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let last_completion_date = habit.last_completion_date.map(Habit::format_completion_date);

        sqlx::query(
            r#"
                INSERT INTO habits (
                    id, owner_id, name, emoji, target_minutes_per_day,
                    progress_minutes, streak, last_completion_date, is_completed_today,
                    version, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(habit.id.to_string())
        .bind(habit.owner_id.to_string())
        .bind(&habit.name)
        .bind(&habit.emoji)
        .bind(habit.target_minutes_per_day)
        .bind(habit.progress_minutes)
        .bind(habit.streak)
        .bind(last_completion_date)
        .bind(habit.is_completed_today)
        .bind(habit.version)
        .bind(habit.created_at.timestamp())
        .bind(habit.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Habits owned by `owner_id`, newest first
    pub async fn find_by_owner<'e, E>(executor: E, owner_id: Uuid) -> DbErrorResult<Vec<Habit>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {} FROM habits WHERE owner_id = ? ORDER BY created_at DESC, rowid DESC",
            HABIT_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(owner_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(habit_from_row).collect()
    }

    pub async fn find_by_id_and_owner<'e, E>(
        executor: E,
        id: Uuid,
        owner_id: Uuid,
    ) -> DbErrorResult<Option<Habit>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {} FROM habits WHERE id = ? AND owner_id = ?",
            HABIT_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(habit_from_row).transpose()
    }

    /// Every habit regardless of owner. Only the rollover job uses this.
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Habit>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {} FROM habits ORDER BY created_at", HABIT_COLUMNS);

        let rows = sqlx::query(&sql).fetch_all(executor).await?;

        rows.iter().map(habit_from_row).collect()
    }

    /// Persist `habit` if the stored row is still at `expected_version`.
    ///
    /// Returns false when the row moved on (another writer won) or no longer
    /// exists for this owner. The stored version becomes `habit.version`, so
    /// callers bump it (see `Habit::next_revision`) before calling.
    pub async fn update_if_version<'e, E>(
        executor: E,
        habit: &Habit,
        expected_version: i32,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let last_completion_date = habit.last_completion_date.map(Habit::format_completion_date);

        let result = sqlx::query(
            r#"
                UPDATE habits SET
                    name = ?, emoji = ?, target_minutes_per_day = ?,
                    progress_minutes = ?, streak = ?, last_completion_date = ?,
                    is_completed_today = ?, version = ?, updated_at = ?
                WHERE id = ? AND owner_id = ? AND version = ?
            "#,
        )
        .bind(&habit.name)
        .bind(&habit.emoji)
        .bind(habit.target_minutes_per_day)
        .bind(habit.progress_minutes)
        .bind(habit.streak)
        .bind(last_completion_date)
        .bind(habit.is_completed_today)
        .bind(habit.version)
        .bind(habit.updated_at.timestamp())
        .bind(habit.id.to_string())
        .bind(habit.owner_id.to_string())
        .bind(expected_version)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn delete_by_id_and_owner<'e, E>(
        executor: E,
        id: Uuid,
        owner_id: Uuid,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM habits WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
