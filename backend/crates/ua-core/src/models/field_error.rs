use thiserror::Error;

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorReason {
    Required,
    TooShort { min: usize },
    InvalidFormat,
    InvalidDate,
}

impl std::fmt::Display for FieldErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldErrorReason::Required => write!(f, "is required"),
            FieldErrorReason::TooShort { min } => {
                write!(f, "must be at least {} characters", min)
            }
            FieldErrorReason::InvalidFormat => write!(f, "must use the YYYY-MM-DD format"),
            FieldErrorReason::InvalidDate => write!(f, "is not a valid calendar date"),
        }
    }
}

/// A validation failure for one named input field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: FieldErrorReason,
}

impl FieldError {
    pub fn new(field: &'static str, reason: FieldErrorReason) -> Self {
        Self { field, reason }
    }

    /// Render a list of field errors as one client-facing message
    pub fn join(errors: &[FieldError]) -> String {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
