//! Per-request access log
//!
//! One record per request on target `http_request`:
//! `method=GET path=/users/1 status=200 duration_ms=0.412`

use crate::AppState;

use std::fmt;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use log::Level;

pub const LOG_TARGET: &str = "http_request";

/// Decides how a finished request is logged
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogger {
    slow_threshold: Option<Duration>,
}

impl RequestLogger {
    /// `None` disables the slow-request check
    pub fn new(slow_threshold: Option<Duration>) -> Self {
        Self { slow_threshold }
    }

    pub fn slow_threshold(&self) -> Option<Duration> {
        self.slow_threshold
    }

    /// Server errors and slow requests are raised to warn
    pub fn level_for(&self, entry: &RequestLogEntry) -> Level {
        let slow = self
            .slow_threshold
            .is_some_and(|threshold| entry.duration > threshold);

        if entry.status.is_server_error() || slow {
            Level::Warn
        } else {
            Level::Info
        }
    }

    pub fn log(&self, entry: &RequestLogEntry) {
        log::log!(target: LOG_TARGET, self.level_for(entry), "{}", entry);
    }
}

/// A completed request
#[derive(Debug, Clone)]
pub struct RequestLogEntry {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub duration: Duration,
}

impl fmt::Display for RequestLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "method={} path={} status={} duration_ms={:.3}",
            self.method,
            self.path,
            self.status.as_u16(),
            self.duration.as_secs_f64() * 1000.0
        )
    }
}

/// Axum middleware wrapping every route. Never alters the response.
pub async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    state.request_logger.log(&RequestLogEntry {
        method,
        path,
        status: response.status(),
        duration: start.elapsed(),
    });

    response
}
