mod api;

use crate::{AppState, RetryPolicy};

use habit_auth::{JwtIssuer, JwtValidator, LoginRateLimiter};
use habit_core::{FixedClock, User, ValidationLimits};

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) const TEST_SECRET: &[u8] = b"unit-test-secret-at-least-32-bytes-long";

pub(crate) async fn create_test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test pool");

    habit_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        jwt_issuer: Arc::new(JwtIssuer::with_hs256(
            TEST_SECRET,
            Duration::from_secs(3600),
        )),
        login_limiter: Arc::new(LoginRateLimiter::new(100, 60)),
        clock: Arc::new(FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date"),
        )),
        retry: RetryPolicy::default(),
        validation: ValidationLimits::default(),
    }
}

pub(crate) fn test_user() -> User {
    User::new(
        "Test User".to_string(),
        "test@example.com".to_string(),
        "not-a-real-hash".to_string(),
    )
}
