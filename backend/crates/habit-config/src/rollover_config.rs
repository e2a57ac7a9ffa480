use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// UTC offsets in practice span -12:00 to +14:00
pub const MIN_UTC_OFFSET_MINUTES: i32 = -12 * 60;
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

pub const MIN_CHECK_INTERVAL_SECS: u64 = 1;
pub const MAX_CHECK_INTERVAL_SECS: u64 = 3_600;
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 60;

/// Server-side daily reset of habit progress
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RolloverConfig {
    /// When false, clients are expected to call the reset route themselves
    pub enabled: bool,
    /// Offset of the server's calendar day from UTC
    pub utc_offset_minutes: i32,
    /// How often the job checks whether today's rollover has run
    pub check_interval_secs: u64,
}

impl Default for RolloverConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            utc_offset_minutes: 0,
            check_interval_secs: DEFAULT_CHECK_INTERVAL_SECS,
        }
    }
}

impl RolloverConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&self.utc_offset_minutes) {
            return Err(ConfigError::rollover(format!(
                "rollover.utc_offset_minutes must be {}-{}, got {}",
                MIN_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES, self.utc_offset_minutes
            )));
        }

        if !(MIN_CHECK_INTERVAL_SECS..=MAX_CHECK_INTERVAL_SECS).contains(&self.check_interval_secs)
        {
            return Err(ConfigError::rollover(format!(
                "rollover.check_interval_secs must be {}-{}, got {}",
                MIN_CHECK_INTERVAL_SECS, MAX_CHECK_INTERVAL_SECS, self.check_interval_secs
            )));
        }

        Ok(())
    }
}
