pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod retry;
pub mod rollover;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, signup},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        signup_request::SignupRequest,
        user_dto::UserDto,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{auth_user::AuthUser, json_body::JsonBody},
    habits::{
        create_habit_request::CreateHabitRequest,
        habit_dto::HabitDto,
        habit_list_response::HabitListResponse,
        habit_response::HabitResponse,
        habit_summary_response::HabitSummaryResponse,
        habits::{
            add_progress, create_habit, delete_habit, get_habit, habit_summary, list_habits,
            reset_habit,
        },
        progress_request::ProgressRequest,
    },
};

pub use crate::error::{Result as ServerResult, ServerError};
pub use crate::retry::{IsRetryable, RetryPolicy, with_retry};
pub use crate::rollover::{DailyRollover, RolloverReport};
pub use crate::routes::build_router;
pub use crate::state::AppState;
