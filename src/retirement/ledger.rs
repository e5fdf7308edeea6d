//! Ledger output structures for the retirement projection
//!
//! One `AccountYear` row per simulated year. All monetary fields are rounded
//! to whole dollars, and principal is tracked separately from gains because
//! they are taxed and accessed differently.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tax::TaxBreakdown;

/// A single year's balances across every tracked account type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountYear {
    /// Simulated year index, 0 = now
    pub year: u32,

    /// Attained age in this year
    pub age: f64,

    /// Pre-tax 401k balance (employee + match + starting balance, compounded)
    pub pretax_401k: f64,

    /// Mega-backdoor Roth principal (always unlocked)
    pub mega_backdoor_principal: f64,
    pub mega_backdoor_gains: f64,

    /// Backdoor Roth principal from cohorts younger than the seasoning period
    pub backdoor_locked: f64,
    /// Backdoor Roth principal from seasoned cohorts
    pub backdoor_unlocked: f64,
    pub backdoor_gains: f64,

    pub hsa_principal: f64,
    pub hsa_gains: f64,

    /// Taxable brokerage cost basis
    pub taxable_principal: f64,
    /// Taxable brokerage unrealized gains
    pub taxable_gains: f64,

    // Per-account totals
    pub roth_total: f64,
    pub hsa_total: f64,
    pub taxable_total: f64,
    pub grand_total: f64,

    /// Everything reachable before an age-59.5-style restriction
    pub accessible_before: f64,
    /// Everything locked until then; partitions grand_total with the above
    pub locked_before: f64,

    /// Grand total deflated to today's dollars
    pub grand_total_real: f64,

    /// Ordinary tax owed if the pre-tax balance were withdrawn
    pub tax_pretax_withdrawal: f64,
    /// Capital gains tax owed on taxable-account gains
    pub tax_capital_gains: f64,
    pub total_withdrawal_tax: f64,
    pub after_tax: f64,
}

/// Annual contribution flows derived from the profile and tax computation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnnualContributions {
    pub pretax_401k_employee: f64,
    pub employer_match: f64,
    pub hsa: f64,
    pub backdoor_roth: f64,
    pub mega_backdoor: f64,
    pub dependent_care_fsa: f64,

    /// Residual savings routed to the taxable brokerage, floored at zero
    pub taxable: f64,
}

/// Advisory condition surfaced as data, never as an error
///
/// The engine computes with the values it is given; these exist so a
/// presentation layer can warn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// Elected contributions exceed post-tax savings; the taxable
    /// contribution was floored at zero
    ContributionsExceedSavings { shortfall: f64 },

    /// A contribution exceeds the IRS limit for its account
    OverIrsLimit {
        account: String,
        contribution: f64,
        limit: f64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ContributionsExceedSavings { shortfall } => write!(
                f,
                "contributions exceed savings by ${:.0}; taxable contribution floored at zero",
                shortfall
            ),
            Advisory::OverIrsLimit {
                account,
                contribution,
                limit,
            } => write!(
                f,
                "{} contribution ${:.0} exceeds the ${:.0} IRS limit",
                account, contribution, limit
            ),
        }
    }
}

/// Complete retirement projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementProjection {
    /// One row per year, 0..=horizon
    pub years: Vec<AccountYear>,

    pub horizon_years: u32,

    /// Contribution flows applied every simulated year
    pub annual: AnnualContributions,

    /// Working-year tax breakdown on the profile's income
    pub taxes: TaxBreakdown,

    /// Gross income minus pre-tax deductions minus total tax
    pub take_home: f64,

    /// Take-home minus annual spend, floored at zero
    pub total_savings: f64,

    pub advisories: Vec<Advisory>,
}

impl RetirementProjection {
    /// Summary statistics for reporting
    pub fn summary(&self) -> RetirementSummary {
        let last = self.years.last();
        RetirementSummary {
            horizon_years: self.horizon_years,
            final_grand_total: last.map(|y| y.grand_total).unwrap_or(0.0),
            final_grand_total_real: last.map(|y| y.grand_total_real).unwrap_or(0.0),
            final_after_tax: last.map(|y| y.after_tax).unwrap_or(0.0),
            final_accessible_before: last.map(|y| y.accessible_before).unwrap_or(0.0),
            final_locked_before: last.map(|y| y.locked_before).unwrap_or(0.0),
        }
    }
}

/// Headline figures at the horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetirementSummary {
    pub horizon_years: u32,
    pub final_grand_total: f64,
    pub final_grand_total_real: f64,
    pub final_after_tax: f64,
    pub final_accessible_before: f64,
    pub final_locked_before: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_display() {
        let advisory = Advisory::ContributionsExceedSavings { shortfall: 12_500.0 };
        assert_eq!(
            advisory.to_string(),
            "contributions exceed savings by $12500; taxable contribution floored at zero"
        );

        let advisory = Advisory::OverIrsLimit {
            account: "401k".to_string(),
            contribution: 50_000.0,
            limit: 47_000.0,
        };
        assert!(advisory.to_string().contains("exceeds the $47000 IRS limit"));
    }
}
