//! Retirement account projection
//!
//! Cohort-based accumulation of tax-advantaged and taxable accounts, with
//! Roth conversion seasoning and withdrawal tax estimates.

mod engine;
mod growth;
mod ledger;

pub use engine::{RetirementEngine, RETIREMENT_OTHER_INCOME};
pub use growth::{
    cohort_balance, cohort_gains, cohort_unlocked, compound_factor, contribution_periods, deflate,
    ROTH_SEASONING_YEARS,
};
pub use ledger::{
    AccountYear, Advisory, AnnualContributions, RetirementProjection, RetirementSummary,
};
