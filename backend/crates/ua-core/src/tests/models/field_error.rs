use crate::{FieldError, FieldErrorReason};

#[test]
fn test_field_error_display() {
    let error = FieldError::new("name", FieldErrorReason::TooShort { min: 2 });
    assert_eq!(error.to_string(), "name: must be at least 2 characters");
}

#[test]
fn test_field_error_join() {
    let errors = vec![
        FieldError::new("name", FieldErrorReason::Required),
        FieldError::new("dob", FieldErrorReason::InvalidDate),
    ];

    assert_eq!(
        FieldError::join(&errors),
        "name: is required; dob: is not a valid calendar date"
    );
}
