//! Source of "today" for the progress engine and the rollover job.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::sync::RwLock;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use error_location::ErrorLocation;

pub trait Clock: Send + Sync {
    /// Current calendar date in the server's configured zone
    fn today(&self) -> NaiveDate;
}

/// Wall clock shifted by a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    #[track_caller]
    pub fn with_offset_minutes(minutes: i32) -> CoreErrorResult<Self> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| CoreError::InvalidUtcOffset {
                minutes,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Clock pinned to a settable date, for tests and simulations
#[derive(Debug)]
pub struct FixedClock {
    date: RwLock<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: RwLock::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        let mut guard = self.date.write().unwrap_or_else(|e| e.into_inner());
        *guard = date;
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: u64) {
        let mut guard = self.date.write().unwrap_or_else(|e| e.into_inner());
        if let Some(next) = guard.checked_add_days(chrono::Days::new(days)) {
            *guard = next;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.date.read().unwrap_or_else(|e| e.into_inner())
    }
}
