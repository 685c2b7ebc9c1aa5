//! Clock Port - Source of "now" and "today".
//!
//! Decisions are keyed by calendar day, so tests need to control which
//! day it is.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;

/// Port for reading the current time
pub trait Clock: Send + Sync {
    /// Current instant, used for ids and `createdAt` / `updatedAt`.
    fn now(&self) -> Timestamp;

    /// Current calendar day, used for the one-decision-per-day rule.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
