use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, RateLimitConfig, RetryConfig,
    RolloverConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub retry: RetryConfig,
    pub validation: ValidationConfig,
    pub rollover: RolloverConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. HABITZ_CONFIG_DIR env var, else ./.habitz/
    /// 2. Create the config directory if missing
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply HABITZ_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: HABITZ_CONFIG_DIR env var > ./.habitz/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate every section. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;
        self.retry.validate()?;
        self.validation.validate()?;
        self.rollover.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Full path of the log file, when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = self.logging.file.as_deref() else {
            return Ok(None);
        };
        Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 (secret {}), token ttl={}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  rate_limit: {}/{}s per email",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x, jitter={}",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier,
            self.retry.jitter
        );
        info!(
            "  validation: name={}, emoji={}, target<={}min",
            self.validation.max_name_length,
            self.validation.max_emoji_length,
            self.validation.max_target_minutes
        );
        info!(
            "  rollover: {} (utc offset {}min, every {}s)",
            if self.rollover.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.rollover.utc_offset_minutes,
            self.rollover.check_interval_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HABITZ_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HABITZ_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("HABITZ_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("HABITZ_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("HABITZ_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Logging
        Self::apply_env_parse("HABITZ_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("HABITZ_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("HABITZ_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("HABITZ_LOG_COLORED", &mut self.logging.colored);

        // Rate limit
        Self::apply_env_parse(
            "HABITZ_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "HABITZ_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Retry
        Self::apply_env_parse("HABITZ_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "HABITZ_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("HABITZ_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "HABITZ_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("HABITZ_RETRY_JITTER", &mut self.retry.jitter);

        // Validation
        Self::apply_env_parse(
            "HABITZ_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "HABITZ_VALIDATION_MAX_EMOJI_LENGTH",
            &mut self.validation.max_emoji_length,
        );
        Self::apply_env_parse(
            "HABITZ_VALIDATION_MAX_TARGET_MINUTES",
            &mut self.validation.max_target_minutes,
        );

        // Rollover
        Self::apply_env_bool("HABITZ_ROLLOVER_ENABLED", &mut self.rollover.enabled);
        Self::apply_env_parse(
            "HABITZ_ROLLOVER_UTC_OFFSET_MINUTES",
            &mut self.rollover.utc_offset_minutes,
        );
        Self::apply_env_parse(
            "HABITZ_ROLLOVER_CHECK_INTERVAL_SECS",
            &mut self.rollover.check_interval_secs,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true" or "1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored and the previous value kept
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
