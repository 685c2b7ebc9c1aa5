//! Dashboard-specific error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::foundation::{DecisionId, ErrorCode, GoalId, ValidationError};

/// Reasons a dashboard mutation was refused.
///
/// A refused mutation leaves the document exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("Goal not found: {0}")]
    GoalNotFound(GoalId),

    #[error("Decision not found: {0}")]
    DecisionNotFound(DecisionId),

    #[error("Goal is archived: {0}")]
    GoalArchived(GoalId),

    #[error("Goal is not archived: {0}")]
    GoalNotArchived(GoalId),

    #[error("A decision was already recorded for {0}")]
    DecisionAlreadyRecorded(NaiveDate),

    #[error("No rule for question '{question_id}' and answer '{answer_key}'")]
    UnknownRule {
        question_id: String,
        answer_key: String,
    },

    #[error("Cannot transfer {requested} from hucha, only {available} available")]
    InsufficientHucha { requested: f64, available: f64 },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DashboardError {
    pub fn unknown_rule(question_id: impl Into<String>, answer_key: impl Into<String>) -> Self {
        DashboardError::UnknownRule {
            question_id: question_id.into(),
            answer_key: answer_key.into(),
        }
    }

    pub fn invalid_document(reason: impl Into<String>) -> Self {
        DashboardError::InvalidDocument(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DashboardError::GoalNotFound(_) => ErrorCode::GoalNotFound,
            DashboardError::DecisionNotFound(_) => ErrorCode::DecisionNotFound,
            DashboardError::GoalArchived(_) => ErrorCode::GoalArchived,
            DashboardError::GoalNotArchived(_) => ErrorCode::GoalNotArchived,
            DashboardError::DecisionAlreadyRecorded(_) => ErrorCode::DecisionAlreadyRecorded,
            DashboardError::UnknownRule { .. } => ErrorCode::UnknownRule,
            DashboardError::InsufficientHucha { .. } => ErrorCode::InsufficientHucha,
            DashboardError::InvalidDocument(_) => ErrorCode::InvalidDocument,
            DashboardError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}
