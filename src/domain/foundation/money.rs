//! Monetary helpers.
//!
//! Amounts are plain `f64` euros in the persisted document; every computed
//! amount is rounded to cents before it is stored.

/// Rounds an amount to two decimals (cents).
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Subtracts `delta` from `amount`, never going below zero.
pub fn saturating_sub(amount: f64, delta: f64) -> f64 {
    round_cents((amount - delta).max(0.0))
}
