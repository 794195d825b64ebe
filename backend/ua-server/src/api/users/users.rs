//! User REST API handlers

use crate::{
    ApiResult, AppState, CreateUserRequest, JsonBody, UpdateUserRequest, UserDto, UserIdParam,
    within_deadline,
};

use ua_core::today_utc;

use axum::{Json, extract::State, http::StatusCode};

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let new_user = req.validate()?;

    let user = within_deadline(&state, state.users.create(&new_user)).await?;

    log::info!("Created user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(UserDto::from_user(user, today_utc())),
    ))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> ApiResult<Json<UserDto>> {
    let user = within_deadline(&state, state.users.find_by_id(id)).await?;

    Ok(Json(UserDto::from_user(user, today_utc())))
}

/// GET /users
///
/// All users ordered by id. Every age is computed against the same date.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = within_deadline(&state, state.users.find_all()).await?;

    let today = today_utc();
    Ok(Json(
        users
            .into_iter()
            .map(|user| UserDto::from_user(user, today))
            .collect(),
    ))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    let new_user = req.validate()?;

    let user = within_deadline(&state, state.users.update(id, &new_user)).await?;

    log::info!("Updated user {}", user.id);

    Ok(Json(UserDto::from_user(user, today_utc())))
}

/// DELETE /users/{id}
///
/// Idempotent: a missing id still answers 204.
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> ApiResult<StatusCode> {
    if within_deadline(&state, state.users.delete(id)).await? {
        log::info!("Deleted user {}", id);
    } else {
        log::debug!("Delete of user {} matched no row", id);
    }

    Ok(StatusCode::NO_CONTENT)
}
