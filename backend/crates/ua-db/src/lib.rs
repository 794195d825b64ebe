pub mod connection;
pub mod error;
pub mod repositories;


pub use connection::pool::connect;
pub use error::{DbError, Result};
#[cfg(any(test, feature = "test-support"))]
pub use repositories::in_memory_user_store::InMemoryUserStore;
pub use repositories::user_repository::UserRepository;
pub use repositories::user_store::UserStore;
