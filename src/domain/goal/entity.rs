//! Goal entity.
//!
//! A goal is a named savings target. Goals live inside the dashboard
//! document, which coordinates the cross-goal rules (single primary goal).
//! This type only guards its own fields.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{round_cents, saturating_sub, GoalId, Timestamp, ValidationError};

/// Maximum length for goal titles.
pub const MAX_TITLE_LENGTH: usize = 120;

/// Input for creating a goal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub horizon_months: u32,
    #[serde(default)]
    pub is_primary: bool,
}

impl NewGoal {
    /// Convenience constructor for a non-primary goal with no savings yet.
    pub fn new(title: impl Into<String>, target_amount: f64, horizon_months: u32) -> Self {
        Self {
            title: title.into(),
            target_amount,
            current_amount: 0.0,
            horizon_months,
            is_primary: false,
        }
    }

    pub fn with_current_amount(mut self, amount: f64) -> Self {
        self.current_amount = amount;
        self
    }

    pub fn as_primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}

/// Partial update for a goal. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub title: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub horizon_months: Option<u32>,
    pub is_primary: Option<bool>,
}

/// Savings goal.
///
/// # Invariants
///
/// - `title` is 1-120 characters after trimming
/// - `target_amount > 0`
/// - `current_amount >= 0`
/// - `horizon_months >= 1`
/// - an archived goal is never primary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    id: GoalId,
    title: String,
    target_amount: f64,
    current_amount: f64,
    horizon_months: u32,
    is_primary: bool,
    archived: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Goal {
    /// Creates a new active, non-primary goal.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if any field breaks the invariants above
    pub fn new(id: GoalId, input: NewGoal, now: Timestamp) -> Result<Self, ValidationError> {
        let title = Self::validate_title(&input.title)?;
        Self::validate_target(input.target_amount)?;
        Self::validate_current(input.current_amount)?;
        Self::validate_horizon(input.horizon_months)?;

        Ok(Self {
            id,
            title,
            target_amount: round_cents(input.target_amount),
            current_amount: round_cents(input.current_amount),
            horizon_months: input.horizon_months,
            is_primary: false,
            archived: false,
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target_amount(&self) -> f64 {
        self.target_amount
    }

    pub fn current_amount(&self) -> f64 {
        self.current_amount
    }

    pub fn horizon_months(&self) -> u32 {
        self.horizon_months
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    /// Not archived.
    pub fn is_active(&self) -> bool {
        !self.archived
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Amount still missing to reach the target (never negative).
    pub fn remaining_amount(&self) -> f64 {
        saturating_sub(self.target_amount, self.current_amount)
    }

    /// Progress towards the target, 0-100.
    pub fn progress_percent(&self) -> f64 {
        round_cents((self.current_amount / self.target_amount * 100.0).min(100.0))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (coordinated by the dashboard document)
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies the non-primary fields of a patch.
    ///
    /// All fields are validated before anything is written, so a failing
    /// patch leaves the goal untouched.
    pub(crate) fn apply_patch(&mut self, patch: &GoalPatch, now: Timestamp) -> Result<(), ValidationError> {
        let title = patch
            .title
            .as_deref()
            .map(Self::validate_title)
            .transpose()?;
        if let Some(target) = patch.target_amount {
            Self::validate_target(target)?;
        }
        if let Some(current) = patch.current_amount {
            Self::validate_current(current)?;
        }
        if let Some(horizon) = patch.horizon_months {
            Self::validate_horizon(horizon)?;
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(target) = patch.target_amount {
            self.target_amount = round_cents(target);
        }
        if let Some(current) = patch.current_amount {
            self.current_amount = round_cents(current);
        }
        if let Some(horizon) = patch.horizon_months {
            self.horizon_months = horizon;
        }
        self.updated_at = now;
        Ok(())
    }

    pub(crate) fn set_primary(&mut self, is_primary: bool, now: Timestamp) {
        if self.is_primary != is_primary {
            self.is_primary = is_primary;
            self.updated_at = now;
        }
    }

    pub(crate) fn archive(&mut self, now: Timestamp) {
        self.archived = true;
        self.is_primary = false;
        self.updated_at = now;
    }

    pub(crate) fn reactivate(&mut self, now: Timestamp) {
        self.archived = false;
        self.updated_at = now;
    }

    pub(crate) fn credit(&mut self, amount: f64, now: Timestamp) {
        self.current_amount = round_cents(self.current_amount + amount);
        self.updated_at = now;
    }

    pub(crate) fn debit(&mut self, amount: f64, now: Timestamp) {
        self.current_amount = saturating_sub(self.current_amount, amount);
        self.updated_at = now;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Trims a title and checks its length. Returns the trimmed title.
    pub(crate) fn validate_title(title: &str) -> Result<String, ValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let len = trimmed.chars().count();
        if len > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, len));
        }
        Ok(trimmed.to_string())
    }

    fn validate_target(target: f64) -> Result<(), ValidationError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(ValidationError::not_positive("target_amount", target));
        }
        Ok(())
    }

    fn validate_current(current: f64) -> Result<(), ValidationError> {
        if !current.is_finite() {
            return Err(ValidationError::invalid_format(
                "current_amount",
                "must be a finite number",
            ));
        }
        if current < 0.0 {
            return Err(ValidationError::negative("current_amount", current));
        }
        Ok(())
    }

    fn validate_horizon(horizon: u32) -> Result<(), ValidationError> {
        if horizon == 0 {
            return Err(ValidationError::not_positive("horizon_months", 0.0));
        }
        Ok(())
    }
}
