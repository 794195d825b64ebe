use ua_core::User;

use chrono::NaiveDate;
use serde::Serialize;

/// User DTO for JSON serialization. `dob` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub age: u32,
}

impl UserDto {
    /// Build the DTO with the age computed against `today`
    pub fn from_user(user: User, today: NaiveDate) -> Self {
        let age = user.age_on(today);
        Self {
            id: user.id,
            name: user.name,
            dob: user.dob,
            age,
        }
    }
}
