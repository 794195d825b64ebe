//! Input validation for user create/update payloads.

use crate::{FieldError, FieldErrorReason, NewUser};

use chrono::NaiveDate;

pub const MIN_NAME_LENGTH: usize = 2;

/// chrono format for the `dob` field
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Validate raw `name`/`dob` input and build a [`NewUser`].
///
/// All failing fields are reported, not just the first one.
pub fn validate_user(name: Option<&str>, dob: Option<&str>) -> Result<NewUser, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = match name {
        None | Some("") => {
            errors.push(FieldError::new("name", FieldErrorReason::Required));
            None
        }
        Some(n) if n.chars().count() < MIN_NAME_LENGTH => {
            errors.push(FieldError::new(
                "name",
                FieldErrorReason::TooShort {
                    min: MIN_NAME_LENGTH,
                },
            ));
            None
        }
        Some(n) => Some(n),
    };

    let dob = match dob {
        None | Some("") => {
            errors.push(FieldError::new("dob", FieldErrorReason::Required));
            None
        }
        Some(d) => match parse_dob(d) {
            Ok(date) => Some(date),
            Err(reason) => {
                errors.push(FieldError::new("dob", reason));
                None
            }
        },
    };

    match (name, dob) {
        (Some(name), Some(dob)) if errors.is_empty() => Ok(NewUser::new(name.to_string(), dob)),
        _ => Err(errors),
    }
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded or signed fields for `%Y-%m-%d`, so the shape is
/// checked byte by byte first.
pub fn parse_dob(value: &str) -> Result<NaiveDate, FieldErrorReason> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(FieldErrorReason::InvalidFormat);
    }

    NaiveDate::parse_from_str(value, DOB_FORMAT).map_err(|_| FieldErrorReason::InvalidDate)
}
