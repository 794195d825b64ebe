//! Path extractor for `/users/{id}`

use crate::api::error::INVALID_USER_ID;
use crate::{ApiError, ApiResult};

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A user id taken from the request path. Must be a non-negative i32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdParam(pub i32);

impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    log::debug!("Rejected user id path: {}", rejection.body_text());
                    ApiError::bad_request(INVALID_USER_ID)
                })?;

            parse_user_id(&raw).map(UserIdParam)
        }
    }
}

pub fn parse_user_id(raw: &str) -> ApiResult<i32> {
    match raw.parse::<i32>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => {
            log::debug!("Invalid user id: {:?}", raw);
            Err(ApiError::bad_request(INVALID_USER_ID))
        }
    }
}
