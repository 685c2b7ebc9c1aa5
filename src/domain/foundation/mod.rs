//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the savings domain.

mod errors;
mod ids;
mod money;
mod summary_range;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{DecisionId, GoalId};
pub use money::{round_cents, saturating_sub};
pub use summary_range::SummaryRange;
pub use timestamp::Timestamp;
