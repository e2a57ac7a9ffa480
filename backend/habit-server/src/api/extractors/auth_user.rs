//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use habit_auth::AuthError;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

/// The authenticated caller, taken from `Authorization: Bearer <jwt>`.
///
/// Rejects with 401 before the handler runs, so no store access happens
/// for anonymous requests.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get(header::AUTHORIZATION)
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = header_value
                .to_str()
                .ok()
                .and_then(|value| value.strip_prefix(BEARER_PREFIX))
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .ok_or_else(|| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.jwt_validator.validate(token)?;
            let user_id = claims.user_id()?;

            log::debug!("Authenticated request from user {}", user_id);

            Ok(AuthUser(user_id))
        }
    }
}
