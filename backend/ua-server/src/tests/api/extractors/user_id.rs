use crate::UserIdParam;
use crate::api::extractors::user_id::parse_user_id;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use tower::ServiceExt;

#[test]
fn test_parse_user_id_accepts_non_negative() {
    assert_eq!(parse_user_id("0").unwrap(), 0);
    assert_eq!(parse_user_id("42").unwrap(), 42);
    assert_eq!(parse_user_id("2147483647").unwrap(), i32::MAX);
}

#[test]
fn test_parse_user_id_rejects_garbage() {
    for raw in ["abc", "", "-1", "1.5", "2147483648", " 1"] {
        let error = parse_user_id(raw).unwrap_err();
        assert_eq!(error.message(), "invalid user id", "input {raw:?}");
    }
}

async fn echo_id(UserIdParam(id): UserIdParam) -> String {
    id.to_string()
}

#[tokio::test]
async fn test_extractor_reads_path_segment() {
    let app = Router::new().route("/users/{id}", get(echo_id));

    let response = app
        .oneshot(Request::get("/users/17").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_extractor_rejects_non_numeric_segment() {
    let app = Router::new().route("/users/{id}", get(echo_id));

    let response = app
        .oneshot(Request::get("/users/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
