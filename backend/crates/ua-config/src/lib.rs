mod config;
mod database_config;
mod error;
mod handler_config;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use handler_config::HandlerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_CONFIG_FILENAME: &str = "ua.toml";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_SLOW_REQUEST_MS: u64 = 1000;

// Database pool
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_MIN_CONNECTIONS: u32 = 0;
const DEFAULT_MAX_LIFETIME_SECS: u64 = 3600;
const MIN_MAX_LIFETIME_SECS: u64 = 60;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const MIN_CONNECT_TIMEOUT_SECS: u64 = 1;
const MAX_CONNECT_TIMEOUT_SECS: u64 = 60;
