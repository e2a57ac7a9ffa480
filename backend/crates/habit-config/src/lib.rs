mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod retry_config;
mod rollover_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use retry_config::RetryConfig;
pub use rollover_config::RolloverConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "HABITZ_";
pub const CONFIG_DIR_ENV: &str = "HABITZ_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".habitz";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "habitz.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
