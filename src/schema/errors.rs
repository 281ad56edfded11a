//! Validation error types

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single violated validation rule
///
/// Each variant names the offending field and the rule it broke; the
/// `Display` output is the human-readable message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field is absent
    #[error("\"{field}\" is required")]
    MissingField { field: String },

    /// Field is present but not a string
    #[error("\"{field}\" must be a string")]
    NotAString { field: String },

    /// Field is an empty string
    #[error("\"{field}\" is not allowed to be empty")]
    EmptyString { field: String },

    /// Field is shorter than the minimum length
    #[error("\"{field}\" length must be at least {min_length} characters long")]
    TooShort { field: String, min_length: usize },

    /// Field is not declared by the schema
    #[error("\"{field}\" is not allowed")]
    UndeclaredField { field: String },

    /// Payload is not a JSON object
    #[error("\"value\" must be an object")]
    NotAnObject,
}

impl ValidationError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn not_a_string(field: impl Into<String>) -> Self {
        Self::NotAString {
            field: field.into(),
        }
    }

    pub fn empty_string(field: impl Into<String>) -> Self {
        Self::EmptyString {
            field: field.into(),
        }
    }

    pub fn too_short(field: impl Into<String>, min_length: usize) -> Self {
        Self::TooShort {
            field: field.into(),
            min_length,
        }
    }

    pub fn undeclared_field(field: impl Into<String>) -> Self {
        Self::UndeclaredField {
            field: field.into(),
        }
    }

    /// The field the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::NotAString { field }
            | Self::EmptyString { field }
            | Self::TooShort { field, .. }
            | Self::UndeclaredField { field } => field,
            Self::NotAnObject => "value",
        }
    }
}
