use chrono::NaiveDate;

/// Validated input for creating or replacing a user.
///
/// The fields are private: the only way to obtain a `NewUser` is
/// [`crate::validate_user`], so every value that reaches a store has already
/// passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    dob: NaiveDate,
}

impl NewUser {
    pub(crate) fn new(name: String, dob: NaiveDate) -> Self {
        Self { name, dob }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }
}
