//! Server-side daily rollover.
//!
//! Once per calendar day (per the injected [`Clock`]) every habit's progress
//! is zeroed with `reset_daily` and the day is recorded in `rollover_runs`.
//! The check runs at startup and then on a fixed interval, so a server that
//! was down over midnight catches up on its first tick.

use crate::error::Result as ServerErrorResult;
use crate::retry::RetryPolicy;

use habit_core::{Clock, Habit, reset_daily};
use habit_db::{HabitRepository, RolloverRepository};

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use log::{debug, error, info, warn};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;

/// Outcome of a rollover that actually ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverReport {
    pub date: NaiveDate,
    /// Habits whose progress or completion flag was cleared
    pub habits_reset: u64,
    /// Habits skipped after losing every version race
    pub habits_skipped: u64,
}

pub struct DailyRollover {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
    retry: RetryPolicy,
}

impl DailyRollover {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>, retry: RetryPolicy) -> Self {
        Self { pool, clock, retry }
    }

    /// Reset every habit unless today's rollover is already recorded.
    ///
    /// Returns `None` when there was nothing to do.
    pub async fn run_if_due(&self) -> ServerErrorResult<Option<RolloverReport>> {
        let today = self.clock.today();

        if let Some(last) = RolloverRepository::last_rollover_date(&self.pool).await?
            && last >= today
        {
            debug!("Rollover for {} already done (last run {})", today, last);
            return Ok(None);
        }

        info!("Running daily rollover for {}", today);

        let mut report = RolloverReport {
            date: today,
            habits_reset: 0,
            habits_skipped: 0,
        };

        for habit in HabitRepository::find_all(&self.pool).await? {
            match self.reset_habit(habit).await? {
                ResetOutcome::Reset => report.habits_reset += 1,
                ResetOutcome::Unchanged => {}
                ResetOutcome::GaveUp => report.habits_skipped += 1,
            }
        }

        if !RolloverRepository::record_rollover(&self.pool, today, report.habits_reset).await? {
            // Another instance recorded the day first; resets are idempotent
            warn!("Rollover for {} was already recorded", today);
        }

        info!(
            "Daily rollover for {} complete: {} reset, {} skipped",
            today, report.habits_reset, report.habits_skipped
        );

        Ok(Some(report))
    }

    /// Run at once, then every `interval`, until the task is aborted
    pub fn spawn(self, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if let Err(e) = self.run_if_due().await {
                    error!("Daily rollover failed: {}", e);
                }
            }
        })
    }

    async fn reset_habit(&self, mut habit: Habit) -> ServerErrorResult<ResetOutcome> {
        for attempt in 1..=self.retry.max_attempts {
            let next = reset_daily(&habit);
            if next == habit {
                return Ok(ResetOutcome::Unchanged);
            }

            let next = next.next_revision();
            if HabitRepository::update_if_version(&self.pool, &next, habit.version).await? {
                return Ok(ResetOutcome::Reset);
            }

            debug!(
                "Habit {} changed during rollover (attempt {})",
                habit.id, attempt
            );

            match HabitRepository::find_by_id_and_owner(&self.pool, habit.id, habit.owner_id)
                .await?
            {
                Some(fresh) => habit = fresh,
                // Deleted meanwhile
                None => return Ok(ResetOutcome::Unchanged),
            }
        }

        warn!(
            "Giving up on habit {} after {} attempts",
            habit.id, self.retry.max_attempts
        );
        Ok(ResetOutcome::GaveUp)
    }
}

enum ResetOutcome {
    Reset,
    Unchanged,
    GaveUp,
}
