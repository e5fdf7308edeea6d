//! Progressive marginal-rate bracket math
//!
//! One bracket walk shared by every ordinary-income table (federal, state,
//! city). Strictly marginal: each bracket's rate applies only to the slice of
//! income falling inside that bracket, never to the whole amount.

use serde::{Deserialize, Serialize};

/// A single marginal bracket taxing income in `[min, max)` at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (inclusive)
    pub min: f64,

    /// Upper bound of the bracket (exclusive), `f64::INFINITY` for the top bracket
    pub max: f64,

    /// Marginal rate applied within the bracket
    pub rate: f64,
}

/// Ordered, contiguous bracket table covering `[0, inf)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Create a table from (min, max, rate) rows
    pub fn from_rows(rows: &[(f64, f64, f64)]) -> Self {
        Self {
            brackets: rows
                .iter()
                .map(|&(min, max, rate)| TaxBracket { min, max, rate })
                .collect(),
        }
    }

    /// Total tax owed on `income`, walking brackets bottom-up
    ///
    /// Income is clamped to non-negative. Zero income owes zero tax; income
    /// above the top bracket's floor is taxed at the top rate only on the
    /// excess above that floor.
    pub fn tax(&self, income: f64) -> f64 {
        let mut remaining = income.max(0.0);
        let mut tax = 0.0;

        for bracket in &self.brackets {
            if remaining <= 0.0 {
                break;
            }
            let taxable_in_bracket = remaining.min(bracket.max - bracket.min);
            tax += taxable_in_bracket * bracket.rate;
            remaining -= taxable_in_bracket;
        }

        tax
    }

    /// Rate of the lowest bracket
    pub fn bottom_rate(&self) -> f64 {
        self.brackets.first().map(|b| b.rate).unwrap_or(0.0)
    }

    /// Rate of the top (unbounded) bracket
    pub fn top_rate(&self) -> f64 {
        self.brackets.last().map(|b| b.rate).unwrap_or(0.0)
    }

    /// Bracket boundaries, for boundary-condition tests
    pub fn boundaries(&self) -> Vec<f64> {
        self.brackets.iter().skip(1).map(|b| b.min).collect()
    }

    /// Structural validity: starts at 0, contiguous, top bracket unbounded
    ///
    /// A malformed table is a configuration defect caught by tests, not a
    /// runtime condition the calculator defends against.
    pub fn is_well_formed(&self) -> bool {
        let Some(first) = self.brackets.first() else {
            return false;
        };
        if first.min != 0.0 {
            return false;
        }
        for pair in self.brackets.windows(2) {
            if pair[0].max != pair[1].min {
                return false;
            }
        }
        self.brackets.last().map(|b| b.max) == Some(f64::INFINITY)
    }

    /// Marginal rates never decrease from bracket to bracket
    pub fn rates_monotone(&self) -> bool {
        self.brackets.windows(2).all(|pair| pair[1].rate >= pair[0].rate)
    }
}
