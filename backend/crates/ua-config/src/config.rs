use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONFIG_FILENAME, DatabaseConfig, HandlerConfig,
    LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub handler: HandlerConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Read UA_CONFIG_FILE if set, else ./ua.toml
    /// 2. Fall back to defaults when the file does not exist
    /// 3. Apply DATABASE_URL and UA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
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

    /// Get the config file path.
    /// Priority: UA_CONFIG_FILE env var > ./ua.toml (relative to cwd)
    pub fn config_path() -> ConfigErrorResult<PathBuf> {
        if let Ok(file) = std::env::var("UA_CONFIG_FILE") {
            return Ok(PathBuf::from(file));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_FILENAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.handler.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} / min {} connections, lifetime {}s, idle {}s, connect timeout {}s, migrations: {})",
            self.database.redacted_url(),
            self.database.max_connections,
            self.database.min_connections,
            self.database.max_lifetime_secs,
            self.database.idle_timeout_secs,
            self.database.connect_timeout_secs,
            self.database.run_migrations
        );
        info!(
            "  logging: {} (colored: {}, slow request: {}ms)",
            *self.logging.level, self.logging.colored, self.logging.slow_request_ms
        );
        info!("  handler: timeout={}s", self.handler.timeout_secs);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("UA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("UA_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_option_string("DATABASE_URL", &mut self.database.url);
        Self::apply_env_parse(
            "UA_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "UA_DATABASE_MIN_CONNECTIONS",
            &mut self.database.min_connections,
        );
        Self::apply_env_parse(
            "UA_DATABASE_MAX_LIFETIME_SECS",
            &mut self.database.max_lifetime_secs,
        );
        Self::apply_env_parse(
            "UA_DATABASE_IDLE_TIMEOUT_SECS",
            &mut self.database.idle_timeout_secs,
        );
        Self::apply_env_parse(
            "UA_DATABASE_CONNECT_TIMEOUT_SECS",
            &mut self.database.connect_timeout_secs,
        );
        Self::apply_env_bool(
            "UA_DATABASE_RUN_MIGRATIONS",
            &mut self.database.run_migrations,
        );

        // Logging
        Self::apply_env_parse("UA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("UA_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("UA_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_parse("UA_LOG_SLOW_REQUEST_MS", &mut self.logging.slow_request_ms);

        // Handler
        Self::apply_env_parse("UA_HANDLER_TIMEOUT_SECS", &mut self.handler.timeout_secs);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
