use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

pub const MIN_EMOJI_LENGTH: usize = 1;
pub const MAX_EMOJI_LENGTH: usize = 64;
pub const DEFAULT_MAX_EMOJI_LENGTH: usize = 16;

pub const MIN_TARGET_MINUTES: i32 = 1;
/// A day has 1440 minutes
pub const MAX_TARGET_MINUTES: i32 = 24 * 60;
pub const DEFAULT_MAX_TARGET_MINUTES: i32 = MAX_TARGET_MINUTES;

/// Field limits applied to habit create requests
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_name_length: usize,
    /// Counted in chars, not bytes
    pub max_emoji_length: usize,
    pub max_target_minutes: i32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_emoji_length: DEFAULT_MAX_EMOJI_LENGTH,
            max_target_minutes: DEFAULT_MAX_TARGET_MINUTES,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&self.max_name_length) {
            return Err(ConfigError::config(format!(
                "validation.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if !(MIN_EMOJI_LENGTH..=MAX_EMOJI_LENGTH).contains(&self.max_emoji_length) {
            return Err(ConfigError::config(format!(
                "validation.max_emoji_length must be {}-{}, got {}",
                MIN_EMOJI_LENGTH, MAX_EMOJI_LENGTH, self.max_emoji_length
            )));
        }

        if !(MIN_TARGET_MINUTES..=MAX_TARGET_MINUTES).contains(&self.max_target_minutes) {
            return Err(ConfigError::config(format!(
                "validation.max_target_minutes must be {}-{}, got {}",
                MIN_TARGET_MINUTES, MAX_TARGET_MINUTES, self.max_target_minutes
            )));
        }

        Ok(())
    }
}
