#[cfg(any(test, feature = "test-support"))]
pub mod in_memory_user_store;
pub mod user_repository;
pub mod user_store;
