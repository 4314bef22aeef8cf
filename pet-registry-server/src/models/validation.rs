//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or falsy (`null`, `""`, `false`, `0`)
    Empty { field: &'static str },

    /// Field is an array or object, which cannot name anything
    NotText { field: &'static str },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::NotText { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotText { field } => write!(f, "{} must be a string", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "petName" };
        assert_eq!(err.to_string(), "petName cannot be empty");
        assert_eq!(err.field(), "petName");

        let err = ValidationError::NotText { field: "ownerName" };
        assert_eq!(err.to_string(), "ownerName must be a string");
    }
}
