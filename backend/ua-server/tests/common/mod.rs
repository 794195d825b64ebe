#![allow(dead_code)]

//! Test infrastructure for ua-server API tests

pub mod log_capture;

use ua_server::{AppState, RequestLogger, build_router};

use ua_core::{NewUser, User};
use ua_db::{DbError, InMemoryUserStore, Result as DbErrorResult, UserStore};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// App state backed by the given store
pub fn create_test_app_state(users: Arc<dyn UserStore>, timeout: Duration) -> AppState {
    AppState::new(users, timeout, RequestLogger::new(None))
}

/// Router over a fresh in-memory store. The store is returned for inspection.
pub fn create_test_app() -> (Router, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    let app = build_router(create_test_app_state(store.clone(), TEST_TIMEOUT));
    (app, store)
}

pub fn create_app_with_store(users: Arc<dyn UserStore>, timeout: Duration) -> Router {
    build_router(create_test_app_state(users, timeout))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

/// Send one request through the router
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }

    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        body: body.to_vec(),
    }
}

/// POST a user and return the response JSON, asserting 201
pub async fn create_user(app: &Router, name: &str, dob: &str) -> serde_json::Value {
    let body = serde_json::json!({ "name": name, "dob": dob }).to_string();
    let response = send(app, Method::POST, "/users", Some(&body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()
}

/// Store whose every call fails with a driver-level error
pub struct FailingStore;

impl FailingStore {
    #[track_caller]
    fn failure() -> DbError {
        DbError::Initialization {
            message: "connection refused (os error 111)".into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn create(&self, _user: &NewUser) -> DbErrorResult<User> {
        Err(Self::failure())
    }

    async fn find_by_id(&self, _id: i32) -> DbErrorResult<User> {
        Err(Self::failure())
    }

    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        Err(Self::failure())
    }

    async fn update(&self, _id: i32, _user: &NewUser) -> DbErrorResult<User> {
        Err(Self::failure())
    }

    async fn delete(&self, _id: i32) -> DbErrorResult<bool> {
        Err(Self::failure())
    }
}

/// Store whose calls never complete
pub struct StallingStore;

#[async_trait]
impl UserStore for StallingStore {
    async fn create(&self, _user: &NewUser) -> DbErrorResult<User> {
        std::future::pending().await
    }

    async fn find_by_id(&self, _id: i32) -> DbErrorResult<User> {
        std::future::pending().await
    }

    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        std::future::pending().await
    }

    async fn update(&self, _id: i32, _user: &NewUser) -> DbErrorResult<User> {
        std::future::pending().await
    }

    async fn delete(&self, _id: i32) -> DbErrorResult<bool> {
        std::future::pending().await
    }
}
