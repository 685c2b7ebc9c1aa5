//! Clock Adapters
//!
//! - **SystemClock** - Wall clock, calendar day in the local time zone
//! - **FixedClock** - Manually driven clock for tests and demos

use chrono::{Local, NaiveDate};
use std::sync::Mutex;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Wall clock.
///
/// "Today" follows the local time zone so a decision made at 00:30 counts
/// for the day the user sees on their device.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Timestamp>,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock set to midday UTC of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .map(|dt| Timestamp::from_datetime(dt.and_utc()))
            .unwrap_or_default();
        Self::new(noon)
    }

    pub fn set(&self, now: Timestamp) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Moves the clock by whole days (negative goes back).
    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now = now.add_days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let clock = FixedClock::at_date(date);

        assert_eq!(clock.today(), date);
    }

    #[test]
    fn fixed_clock_advances_by_days() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let clock = FixedClock::at_date(date);

        clock.advance_days(2);

        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let clock = SystemClock;
        let before = Timestamp::now();
        let now = clock.now();

        assert!(!now.is_before(&before));
    }
}
