use crate::{AuthError, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Throttles login attempts per email address
pub struct LoginRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    max_requests: u32,
    window_secs: u64,
}

impl LoginRateLimiter {
    /// Allow `max_requests` attempts per `window_secs`, refilling evenly
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        let burst = NonZeroU32::new(max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            max_requests: burst.get(),
            window_secs: window_secs.max(1),
        }
    }

    /// Record an attempt for `email`; errors once the quota is spent
    #[track_caller]
    pub fn check(&self, email: &str) -> AuthErrorResult<()> {
        let key = email.trim().to_lowercase();
        self.limiter
            .check_key(&key)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.max_requests,
                window_secs: self.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for keys whose quota has fully refilled
    pub fn prune(&self) {
        self.limiter.retain_recent();
    }
}
