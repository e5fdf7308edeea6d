//! Shared compounding primitives
//!
//! Every account type uses the same timing convention: a contribution made in
//! year `cy` is invested at the start of that year and has accrued
//! `(y - cy + 1)` full periods of growth by year `y`. Starting balances have
//! accrued `y` periods. Keeping this in one place guarantees the convention
//! is applied uniformly and tested once.

/// Years a Roth contribution must season before its principal unlocks
pub const ROTH_SEASONING_YEARS: u32 = 5;

/// Multiplicative growth factor for `periods` full years at `rate`
pub fn compound_factor(rate: f64, periods: u32) -> f64 {
    (1.0 + rate).powi(periods as i32)
}

/// Periods of growth accrued by year `y` for a contribution made in year `cy`
///
/// Start-of-year timing: the contribution grows during its own year.
pub fn contribution_periods(y: u32, cy: u32) -> u32 {
    debug_assert!(cy >= 1 && cy <= y);
    y - cy + 1
}

/// Balance of a single contribution cohort as of year `y`
pub fn cohort_balance(amount: f64, rate: f64, y: u32, cy: u32) -> f64 {
    amount * compound_factor(rate, contribution_periods(y, cy))
}

/// Gains-only portion of a contribution cohort as of year `y`
pub fn cohort_gains(amount: f64, rate: f64, y: u32, cy: u32) -> f64 {
    amount * (compound_factor(rate, contribution_periods(y, cy)) - 1.0)
}

/// Whether a year-`cy` cohort's Roth principal has unlocked by year `y`
///
/// Recomputed for every (contribution-year, evaluation-year) pair; lock state
/// is derived, never stored.
pub fn cohort_unlocked(y: u32, cy: u32) -> bool {
    y - cy >= ROTH_SEASONING_YEARS
}

/// Deflate a nominal amount to today's dollars
pub fn deflate(amount: f64, inflation_rate: f64, years: u32) -> f64 {
    amount / compound_factor(inflation_rate, years)
}
