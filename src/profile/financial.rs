//! Financial profile: input record for the retirement projection engine

use serde::{Deserialize, Serialize};

/// Supported tax jurisdictions (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// New York City resident: federal + NY state + NYC city tax
    NewYorkCity,
    /// New Jersey resident: federal + NJ state tax, no city tax
    NewJersey,
}

impl Jurisdiction {
    pub fn label(&self) -> &'static str {
        match self {
            Jurisdiction::NewYorkCity => "NYC",
            Jurisdiction::NewJersey => "NJ",
        }
    }
}

/// An invested account election: toggle, annual contribution, starting balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AccountElection {
    pub enabled: bool,
    pub annual_contribution: f64,
    pub starting_balance: f64,
}

impl AccountElection {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            annual_contribution: 0.0,
            starting_balance: 0.0,
        }
    }

    /// Annual contribution, zero when the account is toggled off
    pub fn contribution(&self) -> f64 {
        if self.enabled {
            self.annual_contribution
        } else {
            0.0
        }
    }

    /// Starting balance, zero when the account is toggled off
    pub fn initial(&self) -> f64 {
        if self.enabled {
            self.starting_balance
        } else {
            0.0
        }
    }
}

/// Pre-tax 401k election with employer match
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PretaxElection {
    pub enabled: bool,
    pub annual_contribution: f64,
    pub employer_match: f64,
    pub starting_balance: f64,
}

impl PretaxElection {
    pub fn contribution(&self) -> f64 {
        if self.enabled {
            self.annual_contribution
        } else {
            0.0
        }
    }

    pub fn match_contribution(&self) -> f64 {
        if self.enabled {
            self.employer_match
        } else {
            0.0
        }
    }

    pub fn initial(&self) -> f64 {
        if self.enabled {
            self.starting_balance
        } else {
            0.0
        }
    }
}

/// A pre-tax benefit that is spent rather than invested (FSA, commuter)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpendingElection {
    pub enabled: bool,
    pub annual_contribution: f64,
}

impl SpendingElection {
    pub fn contribution(&self) -> f64 {
        if self.enabled {
            self.annual_contribution
        } else {
            0.0
        }
    }
}

/// Full input record for the retirement projection engine
///
/// All monetary fields are non-negative; rates are fractions (percent / 100).
/// The engine is a pure function of this record: every recomputation rebuilds
/// the projection wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub current_age: f64,

    /// Retirement age, fractional allowed (e.g. 59.5). Must be >= current_age.
    pub retirement_age: f64,

    pub gross_income: f64,

    /// Annual non-deductible household spending
    pub annual_spend: f64,

    /// Nominal annual growth rate as a fraction
    pub growth_rate: f64,

    /// Annual inflation rate as a fraction, used to deflate totals
    pub inflation_rate: f64,

    pub jurisdiction: Jurisdiction,

    pub pretax_401k: PretaxElection,
    pub hsa: AccountElection,
    pub backdoor_roth: AccountElection,
    pub mega_backdoor: AccountElection,

    /// Dependent care FSA: reduces taxable income, spent on childcare
    pub dependent_care_fsa: SpendingElection,

    /// Employer-funded commuter benefit: never comes out of gross income
    pub commuter: SpendingElection,

    /// Taxable brokerage starting balance (contributions are derived from
    /// residual savings, not elected directly)
    pub taxable_starting_balance: f64,
}

impl FinancialProfile {
    /// Number of simulated years until retirement, rounded up
    pub fn horizon_years(&self) -> u32 {
        (self.retirement_age - self.current_age).ceil().max(0.0) as u32
    }

    /// Pre-tax payroll deductions: 401k employee deferral + HSA + FSA
    pub fn pretax_deductions(&self) -> f64 {
        self.pretax_401k.contribution()
            + self.hsa.contribution()
            + self.dependent_care_fsa.contribution()
    }
}

impl Default for FinancialProfile {
    fn default() -> Self {
        Self {
            current_age: 31.0,
            retirement_age: 59.5,
            gross_income: 750_000.0,
            annual_spend: 250_000.0,
            growth_rate: 0.07,
            inflation_rate: 0.025,
            jurisdiction: Jurisdiction::NewYorkCity,
            pretax_401k: PretaxElection {
                enabled: true,
                annual_contribution: 47_000.0,
                employer_match: 15_750.0,
                starting_balance: 500_000.0,
            },
            hsa: AccountElection {
                enabled: true,
                annual_contribution: 8_550.0,
                starting_balance: 25_000.0,
            },
            backdoor_roth: AccountElection {
                enabled: true,
                annual_contribution: 14_000.0,
                starting_balance: 50_000.0,
            },
            mega_backdoor: AccountElection {
                enabled: true,
                annual_contribution: 80_000.0,
                starting_balance: 200_000.0,
            },
            dependent_care_fsa: SpendingElection {
                enabled: true,
                annual_contribution: 5_000.0,
            },
            commuter: SpendingElection {
                enabled: true,
                annual_contribution: 3_120.0,
            },
            taxable_starting_balance: 400_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_rounds_fractional_ages_up() {
        let profile = FinancialProfile {
            current_age: 31.0,
            retirement_age: 59.5,
            ..Default::default()
        };
        assert_eq!(profile.horizon_years(), 29);

        let profile = FinancialProfile {
            current_age: 40.0,
            retirement_age: 40.0,
            ..Default::default()
        };
        assert_eq!(profile.horizon_years(), 0);
    }

    #[test]
    fn test_disabled_accounts_contribute_nothing() {
        let election = AccountElection {
            enabled: false,
            annual_contribution: 10_000.0,
            starting_balance: 50_000.0,
        };
        assert_eq!(election.contribution(), 0.0);
        assert_eq!(election.initial(), 0.0);
    }
}
