use ua_core::{FieldError, NewUser, validate_user};

use serde::Deserialize;

/// Body of `PUT /users/{id}`. Full replacement: both fields are required.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub dob: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<NewUser, Vec<FieldError>> {
        validate_user(self.name.as_deref(), self.dob.as_deref())
    }
}
