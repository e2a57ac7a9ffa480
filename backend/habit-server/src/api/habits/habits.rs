//! Habit REST API handlers
//!
//! Every route is scoped to the authenticated owner: a habit belonging to
//! someone else is reported as not found.
//!
//! Progress and reset are read-compute-write cycles guarded by the habit's
//! `version`. A cycle that loses the race is repeated from the read with
//! backoff; when every attempt loses the client receives 409.

use crate::retry::with_retry;
use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateHabitRequest, DeleteResponse, HabitDto,
    HabitListResponse, HabitResponse, HabitSummaryResponse, JsonBody, ProgressRequest,
};

use habit_core::{Habit, HabitSummary, HabitValidator, apply_progress_delta, reset_daily};
use habit_db::HabitRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/habits
///
/// List the caller's habits, newest first
pub async fn list_habits(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<HabitListResponse>> {
    let habits = HabitRepository::find_by_owner(&state.pool, user_id).await?;

    Ok(Json(HabitListResponse {
        habits: habits.into_iter().map(HabitDto::from).collect(),
    }))
}

/// POST /api/v1/habits
pub async fn create_habit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(req): JsonBody<CreateHabitRequest>,
) -> ApiResult<(StatusCode, Json<HabitResponse>)> {
    let name = req.name.trim().to_string();
    let emoji = req
        .emoji
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());

    HabitValidator::validate_habit_create(
        &name,
        emoji.as_deref(),
        req.target_minutes_per_day,
        &state.validation,
    )?;

    let habit = Habit::new(user_id, name, emoji, req.target_minutes_per_day);
    HabitRepository::create(&state.pool, &habit).await?;

    log::debug!("User {} created habit {}", user_id, habit.id);

    Ok((
        StatusCode::CREATED,
        Json(HabitResponse {
            habit: habit.into(),
        }),
    ))
}

/// GET /api/v1/habits/summary
pub async fn habit_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<HabitSummaryResponse>> {
    let habits = HabitRepository::find_by_owner(&state.pool, user_id).await?;
    let summary = HabitSummary::from_habits(&habits);

    Ok(Json(HabitSummaryResponse {
        summary,
        date: Habit::format_completion_date(state.clock.today()),
        habits: habits.into_iter().map(HabitDto::from).collect(),
    }))
}

/// GET /api/v1/habits/{id}
pub async fn get_habit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<HabitResponse>> {
    let habit_id = Uuid::parse_str(&id)?;

    let habit = HabitRepository::find_by_id_and_owner(&state.pool, habit_id, user_id)
        .await?
        .ok_or_else(|| habit_not_found(habit_id))?;

    Ok(Json(HabitResponse {
        habit: habit.into(),
    }))
}

/// POST /api/v1/habits/{id}/progress
///
/// Add `minutes` (may be negative) to today's progress
pub async fn add_progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<ProgressRequest>,
) -> ApiResult<Json<HabitResponse>> {
    let habit_id = Uuid::parse_str(&id)?;
    let minutes = req.minutes;

    let habit = mutate_habit(
        &state,
        user_id,
        habit_id,
        "add_progress",
        move |habit, today| apply_progress_delta(habit, minutes, today),
    )
    .await?;

    Ok(Json(HabitResponse {
        habit: habit.into(),
    }))
}

/// POST /api/v1/habits/{id}/reset
///
/// Zero today's progress; streak history is kept
pub async fn reset_habit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<HabitResponse>> {
    let habit_id = Uuid::parse_str(&id)?;

    let habit = mutate_habit(&state, user_id, habit_id, "reset_habit", |habit, _| {
        reset_daily(habit)
    })
    .await?;

    Ok(Json(HabitResponse {
        habit: habit.into(),
    }))
}

/// DELETE /api/v1/habits/{id}
pub async fn delete_habit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let habit_id = Uuid::parse_str(&id)?;

    if !HabitRepository::delete_by_id_and_owner(&state.pool, habit_id, user_id).await? {
        return Err(habit_not_found(habit_id));
    }

    log::debug!("User {} deleted habit {}", user_id, habit_id);

    Ok(Json(DeleteResponse {
        deleted_id: habit_id.to_string(),
    }))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Run `transform` against the stored habit and persist the result,
/// retrying from a fresh read whenever the version moved underneath.
async fn mutate_habit<F>(
    state: &AppState,
    owner_id: Uuid,
    habit_id: Uuid,
    operation_name: &str,
    transform: F,
) -> ApiResult<Habit>
where
    F: Fn(&Habit, NaiveDate) -> Habit + Sync,
{
    let transform = &transform;
    with_retry(&state.retry, operation_name, || {
        try_mutate_habit(state, owner_id, habit_id, transform)
    })
    .await
}

async fn try_mutate_habit<F>(
    state: &AppState,
    owner_id: Uuid,
    habit_id: Uuid,
    transform: &F,
) -> ApiResult<Habit>
where
    F: Fn(&Habit, NaiveDate) -> Habit + Sync,
{
    let current = HabitRepository::find_by_id_and_owner(&state.pool, habit_id, owner_id)
        .await?
        .ok_or_else(|| habit_not_found(habit_id))?;

    let next = transform(&current, state.clock.today()).next_revision();

    if HabitRepository::update_if_version(&state.pool, &next, current.version).await? {
        Ok(next)
    } else {
        Err(ApiError::Conflict {
            message: format!("Habit {} was modified concurrently", habit_id),
            current_version: Some(current.version),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
fn habit_not_found(habit_id: Uuid) -> ApiError {
    ApiError::NotFound {
        message: format!("Habit {} not found", habit_id),
        location: ErrorLocation::from(Location::caller()),
    }
}
