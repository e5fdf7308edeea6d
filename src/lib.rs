//! Fincast - household financial projection engines
//!
//! This library provides:
//! - Progressive bracket tax math with jurisdictional composition (federal,
//!   state, city, FICA, capital gains, NIIT) for tax year 2025
//! - Retirement account accumulation with per-cohort Roth seasoning and
//!   withdrawal tax estimates
//! - 30-year lifestyle cost projections with life events and insights, plus
//!   an amortized quick estimate
//! - Multi-scenario sweeps over growth rates and profile batches

pub mod lifestyle;
pub mod profile;
pub mod retirement;
pub mod scenario;
pub mod tax;

// Re-export commonly used types
pub use lifestyle::{LifestyleCosts, LifestyleEngine, LifestyleSummary, QuickEstimator};
pub use profile::{FinancialProfile, HouseholdProfile, Jurisdiction, QuickProfile};
pub use retirement::{AccountYear, RetirementEngine, RetirementProjection};
pub use scenario::ScenarioRunner;
pub use tax::TaxPolicy;
