use crate::{ApiError, ApiResult, AppState};

use ua_db::Result as DbErrorResult;

use std::future::Future;
use std::panic::Location;

use error_location::ErrorLocation;

/// Run a store call under the handler deadline.
///
/// On expiry the store future is dropped, which cancels any in-flight query.
pub async fn within_deadline<T, F>(state: &AppState, operation: F) -> ApiResult<T>
where
    F: Future<Output = DbErrorResult<T>>,
{
    match tokio::time::timeout(state.request_timeout, operation).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ApiError::Timeout {
            after: state.request_timeout,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
