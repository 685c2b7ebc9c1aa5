//! Strongly-typed identifier value objects.
//!
//! Ids are a type prefix followed by a Unix millisecond stamp
//! (`goal_1718000000000`, `dec_1718000000000`). Imported documents may carry
//! any non-empty string, so parsing only rejects empty ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Timestamp, ValidationError};

const GOAL_PREFIX: &str = "goal_";
const DECISION_PREFIX: &str = "dec_";

/// Unique identifier for a savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    /// Creates a GoalId from an existing string, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("goal_id"));
        }
        Ok(Self(id))
    }

    /// Builds the id for a goal created at the given Unix millisecond.
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{GOAL_PREFIX}{millis}"))
    }

    /// Builds the id for a goal created at `at`.
    pub fn generate(at: &Timestamp) -> Self {
        Self::from_millis(at.as_unix_millis())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GoalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Unique identifier for a daily decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionId(String);

impl DecisionId {
    /// Creates a DecisionId from an existing string, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("decision_id"));
        }
        Ok(Self(id))
    }

    /// Builds the id for a decision recorded at the given Unix millisecond.
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{DECISION_PREFIX}{millis}"))
    }

    /// Builds the id for a decision recorded at `at`.
    pub fn generate(at: &Timestamp) -> Self {
        Self::from_millis(at.as_unix_millis())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DecisionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_id_uses_goal_prefix_and_millis() {
        let ts = Timestamp::from_unix_millis(1_718_000_000_000);
        assert_eq!(GoalId::generate(&ts).as_str(), "goal_1718000000000");
    }

    #[test]
    fn decision_id_uses_dec_prefix_and_millis() {
        let ts = Timestamp::from_unix_millis(1_718_000_000_000);
        assert_eq!(DecisionId::generate(&ts).to_string(), "dec_1718000000000");
    }

    #[test]
    fn empty_ids_are_rejected() {
        assert!(GoalId::new("").is_err());
        assert!(DecisionId::new("   ").is_err());
        assert!("goal_42".parse::<GoalId>().is_ok());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = GoalId::from_millis(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"goal_7\"");

        let back: GoalId = serde_json::from_str("\"goal_7\"").unwrap();
        assert_eq!(back, id);
    }
}
