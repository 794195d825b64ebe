use ua_core::{FieldError, NewUser, validate_user};

use serde::Deserialize;

/// Body of `POST /users`. Missing fields are reported by validation, not by serde.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// Date of birth, `YYYY-MM-DD`
    #[serde(default)]
    pub dob: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<NewUser, Vec<FieldError>> {
        validate_user(self.name.as_deref(), self.dob.as_deref())
    }
}
