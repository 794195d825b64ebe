use crate::ApiError;

use ua_core::{FieldError, FieldErrorReason};
use ua_db::DbError;

use std::panic::Location;
use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn error_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_body() {
    let response = ApiError::not_found("user not found").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = error_body(response).await;
    assert_eq!(json, serde_json::json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_validation_error_returns_400_with_joined_message() {
    let errors = vec![
        FieldError::new("name", FieldErrorReason::TooShort { min: 2 }),
        FieldError::new("dob", FieldErrorReason::Required),
    ];
    let error = ApiError::from(errors);

    match &error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("expected validation error, got {other:?}"),
    }

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = error_body(response).await;
    assert_eq!(
        json["error"],
        "name: must be at least 2 characters; dob: is required"
    );
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let response = ApiError::bad_request("invalid user id").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await["error"], "invalid user id");
}

#[tokio::test]
async fn test_timeout_returns_500_with_fixed_message() {
    let error = ApiError::Timeout {
        after: Duration::from_secs(30),
        location: ErrorLocation::from(Location::caller()),
    };
    assert!(error.to_string().contains("30s"));

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_body(response).await["error"], "request timed out");
}

#[tokio::test]
async fn test_db_not_found_maps_to_404() {
    let db_error = DbError::NotFound {
        id: 7,
        location: ErrorLocation::from(Location::caller()),
    };

    let response = ApiError::from(db_error).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_body(response).await["error"], "user not found");
}

#[tokio::test]
async fn test_db_failure_hides_driver_detail() {
    let db_error = DbError::Migration {
        message: "relation \"users\" does not exist".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ApiError::from(db_error);
    // Detail travels with the error for the single log line
    assert!(error.to_string().contains("relation \"users\" does not exist"));

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = error_body(response).await;
    assert_eq!(json, serde_json::json!({ "error": "database operation failed" }));
}

#[tokio::test]
async fn test_db_timeout_maps_to_generic_500() {
    let db_error = DbError::Timeout {
        message: "connect took too long".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ApiError::from(db_error);
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.message(), "database operation failed");
}
