use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Handle to the installed logger. Owned by `main`; call `shutdown` before exit.
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Flush buffered records
    pub fn shutdown(self) {
        match self.log_file {
            Some(ref path) => info!(
                "Logger shutting down: level={:?}, file={}",
                self.level,
                path.display()
            ),
            None => info!("Logger shutting down: level={:?}, stdout", self.level),
        }
        log::logger().flush();
    }
}

fn write_record(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: ua_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<Logger> {
    let level_filter = log_level.0;

    let dispatch = if let Some(ref log_path) = log_file {
        let file = fern::log_file(log_path).map_err(|source| ServerError::LogFile {
            path: log_path.clone(),
            source,
        })?;

        Dispatch::new()
            .format(|out, message, record| write_record(out, message, record, record.level()))
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                write_record(out, message, record, colors.color(record.level()))
            })
            .chain(std::io::stdout())
    } else {
        // Plain output for non-TTY (systemd, docker logs)
        Dispatch::new()
            .format(|out, message, record| write_record(out, message, record, record.level()))
            .chain(std::io::stdout())
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(Logger {
        level: level_filter,
        log_file,
    })
}
