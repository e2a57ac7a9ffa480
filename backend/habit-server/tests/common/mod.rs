#![allow(dead_code)]

//! Test infrastructure for habit-server API tests

use habit_auth::{JwtIssuer, JwtValidator, LoginRateLimiter};
use habit_core::{FixedClock, ValidationLimits};
use habit_server::{AppState, RetryPolicy, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes-min";
pub const LOGIN_LIMIT: u32 = 3;
pub const PASSWORD: &str = "correct-horse";

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test database");

    habit_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Everything an API test needs; `clock` is shared with the state
pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<FixedClock>,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::on(date("2024-01-10")).await
    }

    /// App whose clock reads `today`
    pub async fn on(today: NaiveDate) -> Self {
        let clock = Arc::new(FixedClock::new(today));

        let state = AppState {
            pool: create_test_pool().await,
            jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
            jwt_issuer: Arc::new(JwtIssuer::with_hs256(
                TEST_SECRET,
                Duration::from_secs(3600),
            )),
            login_limiter: Arc::new(LoginRateLimiter::new(LOGIN_LIMIT, 60)),
            clock: clock.clone(),
            // Enough attempts that concurrent writers always get through
            retry: RetryPolicy {
                max_attempts: 10,
                initial_delay: Duration::from_millis(1),
                max_delay: Duration::from_millis(10),
                backoff_multiplier: 2.0,
                jitter: false,
            },
            validation: ValidationLimits::default(),
        };

        Self {
            router: build_router(state.clone()),
            state,
            clock,
        }
    }

    /// Send a request; `body` is sent as JSON when present
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Sign up and return (token, user id)
    pub async fn signup(&self, email: &str) -> (String, String) {
        let (status, json) = self
            .send(
                "POST",
                "/api/v1/auth/signup",
                None,
                Some(json!({
                    "fullname": "Test User",
                    "email": email,
                    "password": PASSWORD,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "signup failed: {json}");

        (
            json["token"].as_str().unwrap().to_string(),
            json["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    /// Create a habit and return its JSON
    pub async fn create_habit(&self, token: &str, name: &str, target: i32) -> Value {
        let (status, json) = self
            .send(
                "POST",
                "/api/v1/habits",
                Some(token),
                Some(json!({ "name": name, "target_minutes_per_day": target })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {json}");

        json["habit"].clone()
    }

    pub async fn add_progress(&self, token: &str, habit_id: &str, minutes: i64) -> (StatusCode, Value) {
        self.send(
            "POST",
            &format!("/api/v1/habits/{}/progress", habit_id),
            Some(token),
            Some(json!({ "minutes": minutes })),
        )
        .await
    }
}
