use crate::error::{Result as ServerErrorResult, ServerError};
use crate::retry::RetryPolicy;

use habit_auth::{JwtIssuer, JwtValidator, LoginRateLimiter};
use habit_config::Config;
use habit_core::{Clock, SystemClock, ValidationLimits};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler and the rollover job
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub login_limiter: Arc<LoginRateLimiter>,
    /// Source of "today" for progress and rollover
    pub clock: Arc<dyn Clock>,
    pub retry: RetryPolicy,
    pub validation: ValidationLimits,
}

impl AppState {
    /// Build state from validated configuration
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or(ServerError::MissingJwtSecret)?;

        let clock = SystemClock::with_offset_minutes(config.rollover.utc_offset_minutes)?;
        log::info!("Calendar days follow UTC{}", clock.offset());

        Ok(Self {
            pool,
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
            jwt_issuer: Arc::new(JwtIssuer::with_hs256(
                secret.as_bytes(),
                Duration::from_secs(config.auth.token_ttl_secs),
            )),
            login_limiter: Arc::new(LoginRateLimiter::new(
                config.rate_limit.max_requests,
                config.rate_limit.window_secs,
            )),
            clock: Arc::new(clock),
            retry: RetryPolicy::from(&config.retry),
            validation: ValidationLimits {
                max_name_length: config.validation.max_name_length,
                max_emoji_length: config.validation.max_emoji_length,
                max_target_minutes: config.validation.max_target_minutes,
            },
        })
    }
}
