//! Monthly income bracket and the savings multiplier derived from it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Currency of every amount in the document. Only euros are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
}

/// Multiplier applied when no income range has been set.
pub const DEFAULT_INCOME_MULTIPLIER: f64 = 1.0;

/// Upper bounds (exclusive) of each income tier and its multiplier.
/// Midpoints at or above the last bound use [`TOP_TIER_MULTIPLIER`].
const INCOME_TIERS: [(f64, f64); 4] = [(1500.0, 0.80), (2500.0, 0.90), (4000.0, 1.00), (6000.0, 1.15)];

const TOP_TIER_MULTIPLIER: f64 = 1.30;

/// Self-declared monthly net income bracket.
///
/// # Invariants
///
/// - `min >= 0`
/// - `max >= min`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeRange {
    min: f64,
    max: f64,
    #[serde(default)]
    currency: Currency,
}

impl IncomeRange {
    /// Creates a validated income range in euros.
    ///
    /// # Errors
    ///
    /// - `Negative` if `min` is below zero
    /// - `InvalidFormat` if `max < min` or either bound is not finite
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ValidationError::invalid_format(
                "income_range",
                "bounds must be finite numbers",
            ));
        }
        if min < 0.0 {
            return Err(ValidationError::negative("income_range.min", min));
        }
        if max < min {
            return Err(ValidationError::invalid_format(
                "income_range",
                format!("max ({}) is lower than min ({})", max, min),
            ));
        }
        Ok(Self {
            min,
            max,
            currency: Currency::Eur,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Midpoint of the bracket, the figure the multiplier tiers are keyed on.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Savings multiplier for this bracket.
    ///
    /// Higher incomes turn the same habit into a larger saving.
    pub fn multiplier(&self) -> f64 {
        let midpoint = self.midpoint();
        INCOME_TIERS
            .iter()
            .find(|(upper, _)| midpoint < *upper)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(TOP_TIER_MULTIPLIER)
    }
}

/// Multiplier for an optional income range (1.0 when unset).
pub fn income_multiplier(range: Option<&IncomeRange>) -> f64 {
    range
        .map(IncomeRange::multiplier)
        .unwrap_or(DEFAULT_INCOME_MULTIPLIER)
}
