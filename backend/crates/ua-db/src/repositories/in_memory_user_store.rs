//! In-process [`UserStore`] used by tests that should not need PostgreSQL.

use crate::{DbError, Result as DbErrorResult, UserStore};

use ua_core::{NewUser, User};

use std::collections::BTreeMap;
use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i32, User>,
    /// Mirrors a `serial` sequence: ids are never handed out twice
    last_id: i32,
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: &NewUser) -> DbErrorResult<User> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let stored = User::new(inner.last_id, user.name().to_string(), user.dob());
        inner.users.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> DbErrorResult<User> {
        self.inner
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn update(&self, id: i32, user: &NewUser) -> DbErrorResult<User> {
        let mut inner = self.inner.write().await;
        let stored = inner.users.get_mut(&id).ok_or_else(|| DbError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })?;

        stored.name = user.name().to_string();
        stored.dob = user.dob();

        Ok(stored.clone())
    }

    async fn delete(&self, id: i32) -> DbErrorResult<bool> {
        Ok(self.inner.write().await.users.remove(&id).is_some())
    }
}
