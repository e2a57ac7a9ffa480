use crate::{AppState, health};
use crate::{
    add_progress, create_habit, delete_habit, get_habit, habit_summary, list_habits, login,
    reset_habit, signup,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Accounts
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        // Habits (static "summary" takes precedence over {id})
        .route("/habits", get(list_habits).post(create_habit))
        .route("/habits/summary", get(habit_summary))
        .route("/habits/{id}", get(get_habit).delete(delete_habit))
        .route("/habits/{id}/progress", post(add_progress))
        .route("/habits/{id}/reset", post(reset_habit));

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // Browser clients are served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
