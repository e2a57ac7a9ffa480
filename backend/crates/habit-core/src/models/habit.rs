//! Habit entity - a recurring activity with a daily minute target.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_EMOJI: &str = "✅";
pub const DEFAULT_TARGET_MINUTES_PER_DAY: i32 = 60;

/// Calendar date format used for `last_completion_date` (storage and wire)
pub const COMPLETION_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    /// Owning user, never changes after creation
    pub owner_id: Uuid,

    pub name: String,
    pub emoji: String,
    pub target_minutes_per_day: i32,

    // Daily progress
    pub progress_minutes: i32,
    pub streak: i32,
    pub last_completion_date: Option<NaiveDate>,
    pub is_completed_today: bool,

    /// Optimistic locking version
    pub version: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with zero progress and no streak
    pub fn new(
        owner_id: Uuid,
        name: String,
        emoji: Option<String>,
        target_minutes_per_day: Option<i32>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            emoji: emoji.unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
            target_minutes_per_day: target_minutes_per_day.unwrap_or(DEFAULT_TARGET_MINUTES_PER_DAY),
            progress_minutes: 0,
            streak: 0,
            last_completion_date: None,
            is_completed_today: false,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamp the next persisted revision: bump version and refresh updated_at.
    pub fn next_revision(mut self) -> Self {
        self.version += 1;
        self.updated_at = Utc::now();
        self
    }

    pub fn format_completion_date(date: NaiveDate) -> String {
        date.format(COMPLETION_DATE_FORMAT).to_string()
    }

    #[track_caller]
    pub fn parse_completion_date(value: &str) -> CoreErrorResult<NaiveDate> {
        NaiveDate::parse_from_str(value, COMPLETION_DATE_FORMAT).map_err(|source| {
            CoreError::InvalidDate {
                value: value.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
