//! Scenario runner for efficient batch projections
//!
//! Holds the reference data once, then runs many projections against profile
//! variations without rebuilding tax tables or cost benchmarks.

use rayon::prelude::*;

use crate::lifestyle::{summarize, LifestyleCosts, LifestyleEngine, LifestyleSummary};
use crate::profile::{FinancialProfile, HouseholdProfile};
use crate::retirement::{RetirementEngine, RetirementProjection};
use crate::tax::TaxPolicy;

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let sweep = runner.sweep_growth_rates(&profile, &[0.05, 0.06, 0.07]);
/// ```
#[derive(Clone)]
pub struct ScenarioRunner {
    tax: TaxPolicy,
    costs: LifestyleCosts,
}

impl ScenarioRunner {
    /// Create a runner with the 2025 reference data
    pub fn new() -> Self {
        Self {
            tax: TaxPolicy::year_2025(),
            costs: LifestyleCosts::benchmark_2025(),
        }
    }

    /// Create a runner with specific reference data
    pub fn with_reference(tax: TaxPolicy, costs: LifestyleCosts) -> Self {
        Self { tax, costs }
    }

    /// Run a single retirement projection
    pub fn run(&self, profile: &FinancialProfile) -> RetirementProjection {
        RetirementEngine::new(self.tax.clone()).project(profile)
    }

    /// Run projections for multiple profiles in parallel
    pub fn run_batch(&self, profiles: &[FinancialProfile]) -> Vec<RetirementProjection> {
        profiles
            .par_iter()
            .map(|profile| RetirementEngine::new(self.tax.clone()).project(profile))
            .collect()
    }

    /// Sensitivity sweep: the same profile re-projected under each growth
    /// rate, in parallel. Results come back in the order of `rates`.
    pub fn sweep_growth_rates(
        &self,
        profile: &FinancialProfile,
        rates: &[f64],
    ) -> Vec<(f64, RetirementProjection)> {
        rates
            .par_iter()
            .map(|&rate| {
                let mut varied = profile.clone();
                varied.growth_rate = rate;
                (rate, RetirementEngine::new(self.tax.clone()).project(&varied))
            })
            .collect()
    }

    /// Run the lifestyle projection and summarize it
    pub fn run_lifestyle(&self, profile: &HouseholdProfile) -> LifestyleSummary {
        let engine = LifestyleEngine::new(self.costs.clone());
        let projection = engine.project(profile);
        summarize(&projection, profile, &self.costs)
    }

    pub fn tax(&self) -> &TaxPolicy {
        &self.tax
    }

    pub fn costs(&self) -> &LifestyleCosts {
        &self.costs
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
