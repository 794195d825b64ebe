use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, DEFAULT_SLOW_REQUEST_MS, LogLevel};

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output on stdout (ignored when logging to a file)
    pub colored: bool,
    /// Log file name inside `dir`; `None` logs to stdout
    pub file: Option<String>,
    pub dir: String,
    /// Requests slower than this are logged at warn level (0 = disabled)
    pub slow_request_ms: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            slow_request_ms: DEFAULT_SLOW_REQUEST_MS,
        }
    }
}

impl LoggingConfig {
    /// Full path of the log file, if file output is configured
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|filename| PathBuf::from(&self.dir).join(filename))
    }

    pub fn slow_request_threshold(&self) -> Option<Duration> {
        (self.slow_request_ms > 0).then(|| Duration::from_millis(self.slow_request_ms))
    }
}
