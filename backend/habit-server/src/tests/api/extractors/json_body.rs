use crate::{ApiError, JsonBody, ProgressRequest};

use axum::{body::Body, extract::FromRequest, http::Request};

async fn extract(content_type: Option<&str>, body: &'static str) -> Result<ProgressRequest, ApiError> {
    let mut builder = Request::builder().method("POST").uri("/");
    if let Some(value) = content_type {
        builder = builder.header("Content-Type", value);
    }
    let request = builder.body(Body::from(body)).unwrap();

    JsonBody::<ProgressRequest>::from_request(request, &())
        .await
        .map(|JsonBody(req)| req)
}

#[tokio::test]
async fn given_valid_json_when_extracting_then_body_parsed() {
    let req = extract(Some("application/json"), r#"{"minutes": -15}"#)
        .await
        .unwrap();

    assert_eq!(req.minutes, -15);
}

#[tokio::test]
async fn given_missing_field_when_extracting_then_bad_request() {
    let error = extract(Some("application/json"), r#"{}"#).await.unwrap_err();

    assert!(matches!(error, ApiError::BadRequest { .. }));
}

#[tokio::test]
async fn given_malformed_json_when_extracting_then_bad_request() {
    let error = extract(Some("application/json"), "{minutes:").await.unwrap_err();

    assert!(matches!(error, ApiError::BadRequest { .. }));
}

#[tokio::test]
async fn given_missing_content_type_when_extracting_then_bad_request() {
    let error = extract(None, r#"{"minutes": 5}"#).await.unwrap_err();

    assert!(matches!(error, ApiError::BadRequest { .. }));
}
