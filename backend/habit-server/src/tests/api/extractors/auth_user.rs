use crate::tests::{TEST_SECRET, create_test_state, test_user};
use crate::{ApiError, AuthUser};

use habit_auth::JwtIssuer;

use std::time::Duration;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use chrono::Utc;
use googletest::prelude::*;

async fn extract(authorization: Option<&str>) -> Result<AuthUser, ApiError> {
    let state = create_test_state().await;

    let mut builder = Request::builder().uri("/api/v1/habits");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _) = builder.body(Body::empty()).unwrap().into_parts();

    AuthUser::from_request_parts(&mut parts, &state).await
}

fn message_of(error: ApiError) -> String {
    match error {
        ApiError::Unauthorized { message, .. } => message,
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn given_valid_bearer_token_when_extracting_then_user_id_returned() {
    let user = test_user();
    let issuer = JwtIssuer::with_hs256(TEST_SECRET, Duration::from_secs(3600));
    let token = issuer.issue(&user).unwrap();

    let AuthUser(user_id) = extract(Some(&format!("Bearer {}", token))).await.unwrap();

    assert_that!(user_id, eq(user.id));
}

#[tokio::test]
async fn given_no_header_when_extracting_then_unauthorized() {
    let error = extract(None).await.unwrap_err();

    assert_that!(message_of(error), contains_substring("Missing"));
}

#[tokio::test]
async fn given_basic_scheme_when_extracting_then_unauthorized() {
    let error = extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();

    assert_that!(message_of(error), contains_substring("Bearer"));
}

#[tokio::test]
async fn given_empty_bearer_token_when_extracting_then_unauthorized() {
    let error = extract(Some("Bearer    ")).await.unwrap_err();

    assert_that!(message_of(error), contains_substring("Bearer"));
}

#[tokio::test]
async fn given_token_signed_with_other_secret_when_extracting_then_invalid_token() {
    let issuer = JwtIssuer::with_hs256(
        b"some-other-secret-that-is-also-32-bytes",
        Duration::from_secs(3600),
    );
    let token = issuer.issue(&test_user()).unwrap();

    let error = extract(Some(&format!("Bearer {}", token))).await.unwrap_err();

    assert_that!(message_of(error), eq("Invalid token"));
}

#[tokio::test]
async fn given_expired_token_when_extracting_then_token_expired() {
    let issuer = JwtIssuer::with_hs256(TEST_SECRET, Duration::from_secs(3600));
    let issued_at = Utc::now() - chrono::Duration::days(2);
    let token = issuer.issue_at(&test_user(), issued_at).unwrap();

    let error = extract(Some(&format!("Bearer {}", token))).await.unwrap_err();

    assert_that!(message_of(error), eq("Token expired"));
}
