use crate::RequestLogger;

use ua_db::UserStore;

use std::sync::Arc;
use std::time::Duration;

/// Shared per-request state. Cloned into every handler invocation.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    /// Deadline applied to every store call made by a handler
    pub request_timeout: Duration,
    pub request_logger: RequestLogger,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        request_timeout: Duration,
        request_logger: RequestLogger,
    ) -> Self {
        Self {
            users,
            request_timeout,
            request_logger,
        }
    }
}
