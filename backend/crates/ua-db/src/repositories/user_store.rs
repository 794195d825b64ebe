use crate::Result as DbErrorResult;

use ua_core::{NewUser, User};

use async_trait::async_trait;

/// Persistence boundary for user records.
///
/// Implementations must assign ids that are never reused. Futures returned by
/// these methods may be dropped mid-flight when the caller's deadline expires;
/// each call is expected to be atomic on its own.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user and return the stored row with its assigned id.
    async fn create(&self, user: &NewUser) -> DbErrorResult<User>;

    /// Fails with [`crate::DbError::NotFound`] when no row has `id`.
    async fn find_by_id(&self, id: i32) -> DbErrorResult<User>;

    /// All users ordered by ascending id.
    async fn find_all(&self) -> DbErrorResult<Vec<User>>;

    /// Overwrite name and dob. Fails with [`crate::DbError::NotFound`] when
    /// no row has `id`.
    async fn update(&self, id: i32, user: &NewUser) -> DbErrorResult<User>;

    /// Hard delete. Returns whether a row existed.
    async fn delete(&self, id: i32) -> DbErrorResult<bool>;
}
