//! REST API error types
//!
//! Every variant renders as `{"error": "<message>"}` with the matching status
//! code. Backend detail is logged, never sent to the client.

use ua_core::FieldError;
use ua_db::DbError;

use std::panic::Location;
use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_REQUEST_BODY: &str = "invalid request body";
pub const INVALID_USER_ID: &str = "invalid user id";
pub const USER_NOT_FOUND: &str = "user not found";
pub const DATABASE_OPERATION_FAILED: &str = "database operation failed";
pub const REQUEST_TIMED_OUT: &str = "request timed out";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} (field: {}) {location}", field.as_deref().unwrap_or("-"))]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Store call exceeded the handler deadline (500)
    #[error("Request timed out after {} {location}", humantime::format_duration(*after))]
    Timeout {
        after: Duration,
        location: ErrorLocation,
    },

    /// Internal server error (500). `source` carries the store failure for the log only.
    #[error(
        "Internal error: {message}{} {location}",
        source.as_ref().map(|e| format!(" ({e})")).unwrap_or_default()
    )]
    Internal {
        message: String,
        source: Option<DbError>,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Timeout { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Internal { message, .. } => message,
            ApiError::Timeout { .. } => REQUEST_TIMED_OUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = ApiErrorResponse {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => ApiError::not_found(USER_NOT_FOUND),
            // Driver detail is logged once by `into_response`, never sent
            other => ApiError::Internal {
                message: DATABASE_OPERATION_FAILED.to_string(),
                source: Some(other),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert collected field errors to a single validation error
impl From<Vec<FieldError>> for ApiError {
    #[track_caller]
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::Validation {
            message: FieldError::join(&errors),
            field: errors.first().map(|e| e.field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
