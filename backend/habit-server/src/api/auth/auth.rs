//! Account REST API handlers
//!
//! Signup and login both answer with a bearer token plus the public user.

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, JsonBody, LoginRequest, SignupRequest, UserDto,
};

use habit_auth::{hash_password, verify_password};
use habit_core::{HabitValidator, User};
use habit_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let fullname = req.fullname.trim();
    let email = User::normalize_email(&req.email);

    HabitValidator::validate_signup(fullname, &email, &req.password)?;

    let password_hash = run_blocking(move || hash_password(&req.password)).await??;
    let user = User::new(fullname.to_string(), email, password_hash);

    UserRepository::create(&state.pool, &user).await?;

    let token = state.jwt_issuer.issue(&user)?;
    log::info!("User {} signed up", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let email = User::normalize_email(&req.email);

    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation {
            message: "email and password are required".to_string(),
            field: Some(if email.is_empty() { "email" } else { "password" }.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    state.login_limiter.check(&email)?;

    let user = UserRepository::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let hash = user.password_hash.clone();
    let matches = run_blocking(move || verify_password(&req.password, &hash)).await??;
    if !matches {
        log::debug!("Failed login for user {}", user.id);
        return Err(invalid_credentials());
    }

    let token = state.jwt_issuer.issue(&user)?;

    Ok(Json(AuthResponse {
        token,
        user: UserDto::from(user),
    }))
}

/// argon2 is CPU bound; keep it off the async workers
async fn run_blocking<F, T>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal {
            message: format!("Background task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized {
        message: INVALID_CREDENTIALS.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
