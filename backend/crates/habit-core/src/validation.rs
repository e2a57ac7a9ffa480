use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_FULLNAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Field limits applied to incoming habit data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub max_name_length: usize,
    pub max_emoji_length: usize,
    pub max_target_minutes: i32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            max_emoji_length: 16,
            max_target_minutes: 24 * 60,
        }
    }
}

/// Validates client input before it reaches persistence
pub struct HabitValidator;

impl HabitValidator {
    /// Validate a string field by character count
    #[track_caller]
    pub fn validate_string(
        value: &str,
        field_name: &str,
        min_length: usize,
        max_length: usize,
    ) -> CoreErrorResult<()> {
        let length = value.chars().count();

        if length < min_length {
            return Err(Self::field_error(
                field_name,
                if min_length == 1 {
                    format!("{} is required", field_name)
                } else {
                    format!("{} must be at least {} characters", field_name, min_length)
                },
            ));
        }

        if length > max_length {
            return Err(Self::field_error(
                field_name,
                format!("{} must not exceed {} characters", field_name, max_length),
            ));
        }

        Ok(())
    }

    /// Validate habit creation input. `name` is expected already trimmed.
    #[track_caller]
    pub fn validate_habit_create(
        name: &str,
        emoji: Option<&str>,
        target_minutes_per_day: Option<i32>,
        limits: &ValidationLimits,
    ) -> CoreErrorResult<()> {
        Self::validate_string(name, "name", 1, limits.max_name_length)?;

        if let Some(emoji) = emoji {
            Self::validate_string(emoji, "emoji", 1, limits.max_emoji_length)?;
        }

        if let Some(target) = target_minutes_per_day
            && (target < 1 || target > limits.max_target_minutes)
        {
            return Err(Self::field_error(
                "target_minutes_per_day",
                format!(
                    "target_minutes_per_day must be 1-{}, got {}",
                    limits.max_target_minutes, target
                ),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_signup(fullname: &str, email: &str, password: &str) -> CoreErrorResult<()> {
        Self::validate_string(fullname, "fullname", 1, MAX_FULLNAME_LENGTH)?;
        Self::validate_email(email)?;
        Self::validate_string(password, "password", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
    }

    /// Shape check only: one '@' with something on both sides
    #[track_caller]
    pub fn validate_email(email: &str) -> CoreErrorResult<()> {
        Self::validate_string(email, "email", 1, MAX_EMAIL_LENGTH)?;

        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(Self::field_error("email", "email must be a valid address")),
        }
    }

    #[track_caller]
    fn field_error(field_name: &str, message: impl Into<String>) -> CoreError {
        CoreError::Validation {
            message: message.into(),
            field: Some(field_name.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
