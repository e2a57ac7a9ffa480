use crate::{DbError, Result as DbErrorResult};

use habit_core::Habit;

use std::panic::Location;

use chrono::{NaiveDate, Utc};
use error_location::ErrorLocation;
use sqlx::Row;

/// Ledger of completed daily rollovers
pub struct RolloverRepository;

impl RolloverRepository {
    pub async fn last_rollover_date<'e, E>(executor: E) -> DbErrorResult<Option<NaiveDate>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        // ISO dates sort lexically
        let row = sqlx::query("SELECT MAX(run_date) AS last_run FROM rollover_runs")
            .fetch_one(executor)
            .await?;

        let last_run: Option<String> = row.try_get("last_run")?;

        last_run
            .map(|value| {
                Habit::parse_completion_date(&value).map_err(|e| DbError::Initialization {
                    message: format!("Invalid date in rollover_runs.run_date: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()
    }

    /// Record the rollover for `date`. Returns false if it was already recorded.
    pub async fn record_rollover<'e, E>(
        executor: E,
        date: NaiveDate,
        habits_reset: u64,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let habits_reset = i64::try_from(habits_reset).unwrap_or(i64::MAX);

        let result = sqlx::query(
            r#"
                INSERT INTO rollover_runs (run_date, habits_reset, completed_at)
                VALUES (?, ?, ?)
                ON CONFLICT(run_date) DO NOTHING
            "#,
        )
        .bind(Habit::format_completion_date(date))
        .bind(habits_reset)
        .bind(Utc::now().timestamp())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
