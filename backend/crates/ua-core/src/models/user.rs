//! User entity - the only record the service persists.

use crate::age_on;

use chrono::NaiveDate;

/// A stored user row. `age` is never part of the record; it is derived on
/// demand from `dob`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Assigned by the store on creation, never changed afterwards
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
}

impl User {
    pub fn new(id: i32, name: String, dob: NaiveDate) -> Self {
        Self { id, name, dob }
    }

    /// Age in whole years as of `today`
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_on(self.dob, today)
    }
}
