use crate::{ApiError, IsRetryable};

use habit_auth::AuthError;
use habit_core::CoreError;
use habit_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::{StatusCode, header};
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::NotFound {
        message: "Habit not found".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Habit not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::Validation {
        message: "name is required".into(),
        field: Some("name".into()),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::Unauthorized {
        message: "Invalid token".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_conflict_with_version_mentions_version() {
    let (status, json) = body_json(ApiError::Conflict {
        message: "Habit was modified concurrently".into(),
        current_version: Some(5),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"]["message"].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn test_rate_limited_returns_429_with_retry_after() {
    let response = ApiError::RateLimited {
        message: "Too many login attempts".into(),
        retry_after_secs: 60,
        location: here(),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()[header::RETRY_AFTER], "60");

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::Internal {
        message: "Database operation failed".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err = ApiError::from(uuid_err);

    assert_that!(api_err.status(), eq(StatusCode::BAD_REQUEST));
    assert!(matches!(api_err, ApiError::Validation { .. }));
}

#[test]
fn test_db_conflict_converts_to_non_retryable_conflict() {
    let api_err = ApiError::from(DbError::Conflict {
        message: "email already registered".into(),
        location: here(),
    });

    assert_that!(api_err.status(), eq(StatusCode::CONFLICT));
    assert_that!(api_err.is_retryable(), eq(false));
}

#[test]
fn test_db_row_not_found_converts_to_not_found() {
    let api_err = ApiError::from(DbError::from(sqlx::Error::RowNotFound));

    assert_that!(api_err.status(), eq(StatusCode::NOT_FOUND));
}

#[test]
fn test_db_migration_error_hides_details() {
    let api_err = ApiError::from(DbError::Migration {
        message: "checksum mismatch for 20260101000001".into(),
        location: here(),
    });

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_that!(message, not(contains_substring("checksum")))
        }
        other => panic!("expected Internal, got {other:?}"),
    }
}

#[test]
fn test_version_conflict_is_retryable() {
    let api_err = ApiError::Conflict {
        message: "stale".into(),
        current_version: Some(2),
        location: here(),
    };

    assert_that!(api_err.is_retryable(), eq(true));
}

#[test]
fn test_expired_token_converts_to_unauthorized() {
    let api_err = ApiError::from(AuthError::TokenExpired { location: here() });

    assert_that!(api_err.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(api_err.to_string(), contains_substring("Token expired"));
}

#[test]
fn test_rate_limit_auth_error_converts_to_rate_limited() {
    let api_err = ApiError::from(AuthError::RateLimitExceeded {
        limit: 10,
        window_secs: 60,
        location: here(),
    });

    match api_err {
        ApiError::RateLimited {
            retry_after_secs, ..
        } => assert_that!(retry_after_secs, eq(60)),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[test]
fn test_password_hash_failure_converts_to_internal() {
    let api_err = ApiError::from(AuthError::PasswordHash {
        message: "salt rejected".into(),
        location: here(),
    });

    assert_that!(api_err.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn test_core_validation_keeps_field() {
    let api_err = ApiError::from(CoreError::Validation {
        message: "target_minutes_per_day must be 1-1440, got 0".into(),
        field: Some("target_minutes_per_day".into()),
        location: here(),
    });

    match api_err {
        ApiError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("target_minutes_per_day"))
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}
