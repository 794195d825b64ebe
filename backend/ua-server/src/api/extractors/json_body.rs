use crate::ApiError;
use crate::api::error::INVALID_REQUEST_BODY;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that maps every rejection to a 400 with a fixed message.
///
/// Covers missing content type, malformed JSON and type mismatches alike.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => {
                    log::debug!("Rejected request body: {}", rejection.body_text());
                    Err(ApiError::bad_request(INVALID_REQUEST_BODY))
                }
            }
        }
    }
}
