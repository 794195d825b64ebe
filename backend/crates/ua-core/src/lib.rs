pub mod age;
pub mod models;
pub mod validation;


pub use age::{age, age_on, today_utc};
pub use models::field_error::{FieldError, FieldErrorReason};
pub use models::new_user::NewUser;
pub use models::user::User;
pub use validation::{DOB_FORMAT, MIN_NAME_LENGTH, validate_user};
