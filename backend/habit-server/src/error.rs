use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] habit_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] habit_db::DbError),

    #[error("Core error: {0}")]
    Core(#[from] habit_core::CoreError),

    #[error("auth.jwt_secret is not configured")]
    MissingJwtSecret,

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
