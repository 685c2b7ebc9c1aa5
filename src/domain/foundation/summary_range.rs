//! Window selector for the savings evolution series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// How many days of history the dashboard evolution chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SummaryRange {
    #[serde(rename = "7d")]
    SevenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
}

impl SummaryRange {
    /// Number of calendar days in the window, today included.
    pub fn days(&self) -> u32 {
        match self {
            SummaryRange::SevenDays => 7,
            SummaryRange::ThirtyDays => 30,
            SummaryRange::NinetyDays => 90,
        }
    }

    /// Short label used in the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryRange::SevenDays => "7d",
            SummaryRange::ThirtyDays => "30d",
            SummaryRange::NinetyDays => "90d",
        }
    }
}

impl fmt::Display for SummaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(SummaryRange::SevenDays),
            "30d" => Ok(SummaryRange::ThirtyDays),
            "90d" => Ok(SummaryRange::NinetyDays),
            other => Err(ValidationError::invalid_format(
                "range",
                format!("expected 7d, 30d or 90d, got '{}'", other),
            )),
        }
    }
}
