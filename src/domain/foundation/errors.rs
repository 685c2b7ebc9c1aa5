//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be greater than zero, got {actual}")]
    NotPositive { field: String, actual: f64 },

    #[error("Field '{field}' cannot be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates a not-positive validation error.
    pub fn not_positive(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates a negative-value validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    GoalNotFound,
    DecisionNotFound,

    // State errors
    GoalArchived,
    GoalNotArchived,
    DecisionAlreadyRecorded,
    UnknownRule,
    InsufficientHucha,
    InvalidDocument,

    // Infrastructure errors
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::GoalNotFound => "GOAL_NOT_FOUND",
            ErrorCode::DecisionNotFound => "DECISION_NOT_FOUND",
            ErrorCode::GoalArchived => "GOAL_ARCHIVED",
            ErrorCode::GoalNotArchived => "GOAL_NOT_ARCHIVED",
            ErrorCode::DecisionAlreadyRecorded => "DECISION_ALREADY_RECORDED",
            ErrorCode::UnknownRule => "UNKNOWN_RULE",
            ErrorCode::InsufficientHucha => "INSUFFICIENT_HUCHA",
            ErrorCode::InvalidDocument => "INVALID_DOCUMENT",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("user_name");
        assert_eq!(format!("{}", err), "Field 'user_name' cannot be empty");
    }

    #[test]
    fn validation_error_too_long_displays_correctly() {
        let err = ValidationError::too_long("title", 120, 130);
        assert_eq!(
            format!("{}", err),
            "Field 'title' must be at most 120 characters, got 130"
        );
    }

    #[test]
    fn validation_error_not_positive_reports_field() {
        let err = ValidationError::not_positive("target_amount", 0.0);
        assert_eq!(err.field(), "target_amount");
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::GoalNotFound), "GOAL_NOT_FOUND");
        assert_eq!(
            format!("{}", ErrorCode::DecisionAlreadyRecorded),
            "DECISION_ALREADY_RECORDED"
        );
        assert_eq!(format!("{}", ErrorCode::StorageError), "STORAGE_ERROR");
    }
}
