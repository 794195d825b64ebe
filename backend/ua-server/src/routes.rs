use crate::{
    AppState, create_user, delete_user, get_user, list_users, request_logging::log_requests,
    update_user,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}
