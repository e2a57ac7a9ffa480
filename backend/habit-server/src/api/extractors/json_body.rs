use crate::ApiError;

use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use error_location::ErrorLocation;

/// `Json<T>` whose rejections use the API error body.
///
/// Axum's own rejection answers 415/422 in plain text; clients of this API
/// always get a JSON 400 instead.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError::BadRequest {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
