//! Account accumulation engine
//!
//! Simulates compounding growth of every elected account type year by year up
//! to the retirement horizon. Pure: the same profile always produces the same
//! projection, recomputed wholesale on every run.

use crate::profile::FinancialProfile;
use crate::tax::TaxPolicy;

use super::growth::{cohort_unlocked, compound_factor, contribution_periods, deflate};
use super::ledger::{
    AccountYear, Advisory, AnnualContributions, RetirementProjection,
};

/// Assumed other ordinary income in retirement when estimating capital gains
/// tax on the taxable account
pub const RETIREMENT_OTHER_INCOME: f64 = 100_000.0;

/// Retirement projection engine
pub struct RetirementEngine {
    tax: TaxPolicy,
}

impl RetirementEngine {
    pub fn new(tax: TaxPolicy) -> Self {
        Self { tax }
    }

    /// Run the full projection for a profile
    pub fn project(&self, profile: &FinancialProfile) -> RetirementProjection {
        let horizon = profile.horizon_years();

        // Working-year taxes: ordinary tax on income net of pre-tax
        // deductions, FICA on gross wages.
        let taxable_income = (profile.gross_income - profile.pretax_deductions()).max(0.0);
        let taxes = self
            .tax
            .total_tax(taxable_income, profile.gross_income, profile.jurisdiction);

        let take_home = profile.gross_income - profile.pretax_deductions() - taxes.total;
        let total_savings = (take_home - profile.annual_spend).max(0.0);

        // Roth-type contributions come out of post-tax savings; whatever is
        // left flows to the taxable brokerage, floored at zero.
        let roth_type = profile.backdoor_roth.contribution() + profile.mega_backdoor.contribution();
        let residual = total_savings - roth_type;

        let mut advisories = Vec::new();
        if residual < 0.0 {
            advisories.push(Advisory::ContributionsExceedSavings {
                shortfall: -residual,
            });
        }

        let annual = AnnualContributions {
            pretax_401k_employee: profile.pretax_401k.contribution(),
            employer_match: profile.pretax_401k.match_contribution(),
            hsa: profile.hsa.contribution(),
            backdoor_roth: profile.backdoor_roth.contribution(),
            mega_backdoor: profile.mega_backdoor.contribution(),
            dependent_care_fsa: profile.dependent_care_fsa.contribution(),
            taxable: residual.max(0.0),
        };

        advisories.extend(self.limit_advisories(&annual));

        let years = (0..=horizon)
            .map(|y| self.ledger_year(profile, &annual, y))
            .collect();

        RetirementProjection {
            years,
            horizon_years: horizon,
            annual,
            taxes,
            take_home,
            total_savings,
            advisories,
        }
    }

    /// Compare contributions against IRS limits; household gets two of each
    /// per-person limit. Advisory only: the projection still uses the
    /// elected values.
    fn limit_advisories(&self, annual: &AnnualContributions) -> Vec<Advisory> {
        let limits = &self.tax.limits;
        let checks = [
            ("401k employee", annual.pretax_401k_employee, limits.employee_401k * 2.0),
            ("HSA", annual.hsa, limits.hsa_family),
            ("backdoor Roth", annual.backdoor_roth, limits.backdoor_roth * 2.0),
            ("mega-backdoor Roth", annual.mega_backdoor, limits.mega_backdoor * 2.0),
            ("dependent care FSA", annual.dependent_care_fsa, limits.dependent_care_fsa),
        ];

        checks
            .into_iter()
            .filter(|&(_, contribution, limit)| contribution > limit)
            .map(|(account, contribution, limit)| Advisory::OverIrsLimit {
                account: account.to_string(),
                contribution,
                limit,
            })
            .collect()
    }

    /// Build the ledger row for simulated year `y`
    ///
    /// Starting balances compound for the full elapsed time; each year's
    /// contribution is a distinct cohort compounding from its own year
    /// (start-of-year timing), with Roth lock status derived per cohort.
    fn ledger_year(
        &self,
        profile: &FinancialProfile,
        annual: &AnnualContributions,
        y: u32,
    ) -> AccountYear {
        let rate = profile.growth_rate;

        let mut pretax_401k = 0.0;
        let mut mbd_principal = 0.0;
        let mut mbd_gains = 0.0;
        let mut backdoor_locked = 0.0;
        let mut backdoor_unlocked = 0.0;
        let mut backdoor_gains = 0.0;
        let mut hsa_principal = 0.0;
        let mut hsa_gains = 0.0;
        let mut taxable_principal = 0.0;
        let mut taxable_gains = 0.0;

        // Starting balances, grown for the full elapsed time. Starting Roth
        // balances are assumed already seasoned.
        let initial_factor = compound_factor(rate, y);
        pretax_401k += profile.pretax_401k.initial() * initial_factor;

        mbd_principal += profile.mega_backdoor.initial();
        mbd_gains += profile.mega_backdoor.initial() * (initial_factor - 1.0);

        backdoor_unlocked += profile.backdoor_roth.initial();
        backdoor_gains += profile.backdoor_roth.initial() * (initial_factor - 1.0);

        hsa_principal += profile.hsa.initial();
        hsa_gains += profile.hsa.initial() * (initial_factor - 1.0);

        taxable_principal += profile.taxable_starting_balance;
        taxable_gains += profile.taxable_starting_balance * (initial_factor - 1.0);

        // One cohort per contribution year, classified afresh for this y.
        for cy in 1..=y {
            let factor = compound_factor(rate, contribution_periods(y, cy));
            let gains_factor = factor - 1.0;

            pretax_401k += (annual.pretax_401k_employee + annual.employer_match) * factor;

            mbd_principal += annual.mega_backdoor;
            mbd_gains += annual.mega_backdoor * gains_factor;

            if cohort_unlocked(y, cy) {
                backdoor_unlocked += annual.backdoor_roth;
            } else {
                backdoor_locked += annual.backdoor_roth;
            }
            backdoor_gains += annual.backdoor_roth * gains_factor;

            hsa_principal += annual.hsa;
            hsa_gains += annual.hsa * gains_factor;

            taxable_principal += annual.taxable;
            taxable_gains += annual.taxable * gains_factor;
        }

        // Round once, then derive every aggregate from the rounded parts so
        // the accessible/locked partition sums exactly.
        let pretax_401k = pretax_401k.round();
        let mbd_principal = mbd_principal.round();
        let mbd_gains = mbd_gains.round();
        let backdoor_locked = backdoor_locked.round();
        let backdoor_unlocked = backdoor_unlocked.round();
        let backdoor_gains = backdoor_gains.round();
        let hsa_principal = hsa_principal.round();
        let hsa_gains = hsa_gains.round();
        let taxable_principal = taxable_principal.round();
        let taxable_gains = taxable_gains.round();

        let roth_total =
            mbd_principal + mbd_gains + backdoor_locked + backdoor_unlocked + backdoor_gains;
        let hsa_total = hsa_principal + hsa_gains;
        let taxable_total = taxable_principal + taxable_gains;

        let accessible_before = mbd_principal
            + backdoor_unlocked
            + hsa_principal
            + taxable_principal
            + taxable_gains;
        let locked_before =
            pretax_401k + mbd_gains + backdoor_locked + backdoor_gains + hsa_gains;
        let grand_total = accessible_before + locked_before;

        // Estimated tax if everything were accessed at this point: the
        // pre-tax balance as ordinary income (after its own deduction, no
        // FICA), taxable gains through the capital gains composer.
        let tax_pretax_withdrawal = self
            .tax
            .ordinary_tax(pretax_401k, profile.jurisdiction)
            .total()
            .round();
        let tax_capital_gains = self
            .tax
            .capital_gains_tax(taxable_gains, RETIREMENT_OTHER_INCOME, profile.jurisdiction)
            .total()
            .round();
        let total_withdrawal_tax = tax_pretax_withdrawal + tax_capital_gains;

        AccountYear {
            year: y,
            age: profile.current_age + y as f64,
            pretax_401k,
            mega_backdoor_principal: mbd_principal,
            mega_backdoor_gains: mbd_gains,
            backdoor_locked,
            backdoor_unlocked,
            backdoor_gains,
            hsa_principal,
            hsa_gains,
            taxable_principal,
            taxable_gains,
            roth_total,
            hsa_total,
            taxable_total,
            grand_total,
            accessible_before,
            locked_before,
            grand_total_real: deflate(grand_total, profile.inflation_rate, y).round(),
            tax_pretax_withdrawal,
            tax_capital_gains,
            total_withdrawal_tax,
            after_tax: grand_total - total_withdrawal_tax,
        }
    }
}

impl Default for RetirementEngine {
    fn default() -> Self {
        Self::new(TaxPolicy::year_2025())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{AccountElection, Jurisdiction, PretaxElection, SpendingElection};
    use approx::assert_relative_eq;

    /// A profile with every account off except one taxable starting balance
    fn taxable_only_profile() -> FinancialProfile {
        FinancialProfile {
            current_age: 40.0,
            retirement_age: 50.0,
            gross_income: 0.0,
            annual_spend: 0.0,
            growth_rate: 0.07,
            inflation_rate: 0.0,
            jurisdiction: Jurisdiction::NewJersey,
            pretax_401k: PretaxElection {
                enabled: false,
                annual_contribution: 0.0,
                employer_match: 0.0,
                starting_balance: 0.0,
            },
            hsa: AccountElection::disabled(),
            backdoor_roth: AccountElection::disabled(),
            mega_backdoor: AccountElection::disabled(),
            dependent_care_fsa: SpendingElection {
                enabled: false,
                annual_contribution: 0.0,
            },
            commuter: SpendingElection {
                enabled: false,
                annual_contribution: 0.0,
            },
            taxable_starting_balance: 100_000.0,
        }
    }

    #[test]
    fn test_taxable_balance_compounds_with_basis_fixed() {
        let engine = RetirementEngine::default();
        let projection = engine.project(&taxable_only_profile());

        let year5 = &projection.years[5];
        assert_eq!(year5.taxable_principal, 100_000.0);
        assert_eq!(year5.taxable_gains, 40_255.0);
        assert_eq!(year5.taxable_total, 140_255.0);
    }

    #[test]
    fn test_grand_total_partition_every_year() {
        let engine = RetirementEngine::default();
        let projection = engine.project(&FinancialProfile::default());

        for year in &projection.years {
            assert_eq!(
                year.accessible_before + year.locked_before,
                year.grand_total,
                "partition broken in year {}",
                year.year
            );
            let account_sum =
                year.pretax_401k + year.roth_total + year.hsa_total + year.taxable_total;
            assert_eq!(account_sum, year.grand_total);
        }
    }

    #[test]
    fn test_backdoor_cohorts_unlock_after_seasoning() {
        let mut profile = taxable_only_profile();
        profile.taxable_starting_balance = 0.0;
        profile.retirement_age = 60.0;
        profile.gross_income = 500_000.0;
        profile.backdoor_roth = AccountElection {
            enabled: true,
            annual_contribution: 10_000.0,
            starting_balance: 0.0,
        };
        profile.growth_rate = 0.05;

        let engine = RetirementEngine::default();
        let projection = engine.project(&profile);

        // Through year 5 every cohort is younger than 5 elapsed years
        assert_eq!(projection.years[4].backdoor_unlocked, 0.0);
        assert_eq!(projection.years[4].backdoor_locked, 40_000.0);
        assert_eq!(projection.years[5].backdoor_unlocked, 0.0);
        assert_eq!(projection.years[5].backdoor_locked, 50_000.0);

        // Year 6: the year-1 cohort has 5 elapsed years and unlocks
        assert_eq!(projection.years[6].backdoor_unlocked, 10_000.0);
        assert_eq!(projection.years[6].backdoor_locked, 50_000.0);

        // Year 10: cohorts 1-5 unlocked, 6-10 still locked
        assert_eq!(projection.years[10].backdoor_unlocked, 50_000.0);
        assert_eq!(projection.years[10].backdoor_locked, 50_000.0);
    }

    #[test]
    fn test_balances_monotone_with_positive_growth() {
        let engine = RetirementEngine::default();
        let projection = engine.project(&FinancialProfile::default());

        for pair in projection.years.windows(2) {
            assert!(
                pair[1].grand_total >= pair[0].grand_total,
                "grand total decreased from year {} to {}",
                pair[0].year,
                pair[1].year
            );
            assert!(pair[1].pretax_401k >= pair[0].pretax_401k);
            assert!(pair[1].taxable_total >= pair[0].taxable_total);
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let engine = RetirementEngine::default();
        let profile = FinancialProfile::default();

        let first = engine.project(&profile);
        let second = engine.project(&profile);

        assert_eq!(first.years, second.years);
        assert_eq!(first.annual.taxable, second.annual.taxable);
        assert_eq!(first.taxes.total, second.taxes.total);
    }

    #[test]
    fn test_contributions_exceeding_savings_floor_taxable_at_zero() {
        let mut profile = FinancialProfile::default();
        profile.gross_income = 300_000.0;
        profile.annual_spend = 200_000.0;

        let engine = RetirementEngine::default();
        let projection = engine.project(&profile);

        assert_eq!(projection.annual.taxable, 0.0);
        assert!(projection
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::ContributionsExceedSavings { .. })));
    }

    #[test]
    fn test_over_limit_contribution_is_advisory_not_rejected() {
        let mut profile = FinancialProfile::default();
        profile.hsa.annual_contribution = 20_000.0;

        let engine = RetirementEngine::default();
        let projection = engine.project(&profile);

        // The projection still uses the elected value
        assert_eq!(projection.annual.hsa, 20_000.0);
        assert!(projection.advisories.iter().any(|a| matches!(
            a,
            Advisory::OverIrsLimit { account, .. } if account == "HSA"
        )));
    }

    #[test]
    fn test_zero_horizon_produces_single_starting_row() {
        let mut profile = taxable_only_profile();
        profile.retirement_age = profile.current_age;

        let engine = RetirementEngine::default();
        let projection = engine.project(&profile);

        assert_eq!(projection.years.len(), 1);
        let year0 = &projection.years[0];
        assert_eq!(year0.taxable_principal, 100_000.0);
        assert_eq!(year0.taxable_gains, 0.0);
    }

    #[test]
    fn test_real_total_deflated_by_inflation() {
        let mut profile = taxable_only_profile();
        profile.inflation_rate = 0.03;

        let engine = RetirementEngine::default();
        let projection = engine.project(&profile);

        let year10 = &projection.years[10];
        assert!(year10.grand_total_real < year10.grand_total);
        assert_relative_eq!(
            year10.grand_total_real,
            (year10.grand_total / 1.03f64.powi(10)).round(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_withdrawal_tax_reduces_after_tax_value() {
        let engine = RetirementEngine::default();
        let projection = engine.project(&FinancialProfile::default());

        let last = projection.years.last().unwrap();
        assert!(last.tax_pretax_withdrawal > 0.0);
        assert!(last.tax_capital_gains > 0.0);
        assert_eq!(last.after_tax, last.grand_total - last.total_withdrawal_tax);
    }
}
