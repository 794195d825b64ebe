pub mod field_error;
pub mod new_user;
pub mod user;
