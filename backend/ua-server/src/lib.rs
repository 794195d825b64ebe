pub mod api;
pub mod error;
pub mod logger;
pub mod request_logging;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    deadline::within_deadline,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{json_body::JsonBody, user_id::UserIdParam},
    users::{
        create_user_request::CreateUserRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};
pub use request_logging::{RequestLogEntry, RequestLogger};
pub use state::AppState;

pub use crate::routes::build_router;
