//! Long-term capital gains, NIIT, and state gains approximation
//!
//! The federal LTCG rate is chosen from income-inclusive thresholds (ordinary
//! income plus gains decides the bracket, not gains alone). NIIT applies the
//! flat rate to the lesser of total gains and the MAGI excess over the
//! threshold, per IRS rules.

use serde::{Deserialize, Serialize};

use super::TaxPolicy;
use crate::profile::Jurisdiction;

/// Capital gains tax breakdown for a single realization
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CapitalGainsTax {
    /// Federal long-term capital gains tax
    pub federal: f64,

    /// Net Investment Income Tax
    pub niit: f64,

    /// State (and city) flat-rate approximation
    pub state: f64,
}

impl CapitalGainsTax {
    pub fn total(&self) -> f64 {
        self.federal + self.niit + self.state
    }
}

impl TaxPolicy {
    /// Tax on long-term gains realized on top of `ordinary_income`
    pub fn capital_gains_tax(
        &self,
        gains: f64,
        ordinary_income: f64,
        jurisdiction: Jurisdiction,
    ) -> CapitalGainsTax {
        let gains = gains.max(0.0);
        let ordinary = ordinary_income.max(0.0);
        let rates = &self.capital_gains;

        let total_income = ordinary + gains;
        let federal_rate = if total_income <= rates.zero_bracket_max {
            0.0
        } else if total_income <= rates.mid_bracket_max {
            rates.mid_rate
        } else {
            rates.top_rate
        };
        let federal = gains * federal_rate;

        // NIIT taxes the lesser of the gains and the MAGI excess over the
        // threshold, never the full gains just because income clears it.
        let magi_excess = (total_income - rates.niit_threshold).max(0.0);
        let niit = gains.min(magi_excess) * rates.niit_rate;

        // States here tax gains as ordinary income; approximate with the
        // high-earner marginal rate.
        let state_rate = match jurisdiction {
            Jurisdiction::NewYorkCity => rates.new_york_state_rate + rates.new_york_city_rate,
            Jurisdiction::NewJersey => rates.new_jersey_rate,
        };
        let state = gains * state_rate;

        CapitalGainsTax { federal, niit, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_bracket_below_threshold() {
        let policy = TaxPolicy::year_2025();
        let tax = policy.capital_gains_tax(50_000.0, 40_000.0, Jurisdiction::NewJersey);
        // 90k total income is under the 96,700 zero bracket
        assert_eq!(tax.federal, 0.0);
        assert_eq!(tax.niit, 0.0);
        assert!(tax.state > 0.0);
    }

    #[test]
    fn test_rate_selected_by_income_inclusive_threshold() {
        let policy = TaxPolicy::year_2025();

        // Gains alone are small, but ordinary income pushes total over the
        // mid bracket max, so the top rate applies.
        let tax = policy.capital_gains_tax(10_000.0, 620_000.0, Jurisdiction::NewJersey);
        assert_relative_eq!(tax.federal, 10_000.0 * 0.20, epsilon = 1e-6);

        // Same gains beneath the mid bracket max take the mid rate.
        let tax = policy.capital_gains_tax(10_000.0, 200_000.0, Jurisdiction::NewJersey);
        assert_relative_eq!(tax.federal, 10_000.0 * 0.15, epsilon = 1e-6);
    }

    #[test]
    fn test_niit_limited_by_magi_excess() {
        // Regression for the corrected NIIT form: income barely over the
        // threshold must tax only the excess, not the full gains.
        let policy = TaxPolicy::year_2025();
        let tax = policy.capital_gains_tax(100_000.0, 160_000.0, Jurisdiction::NewJersey);

        // MAGI = 260k, excess = 10k < 100k gains
        assert_relative_eq!(tax.niit, 10_000.0 * 0.038, epsilon = 1e-6);
    }

    #[test]
    fn test_niit_full_gains_when_excess_larger() {
        let policy = TaxPolicy::year_2025();
        let tax = policy.capital_gains_tax(50_000.0, 400_000.0, Jurisdiction::NewJersey);
        assert_relative_eq!(tax.niit, 50_000.0 * 0.038, epsilon = 1e-6);
    }

    #[test]
    fn test_niit_zero_at_threshold() {
        let policy = TaxPolicy::year_2025();
        let tax = policy.capital_gains_tax(50_000.0, 200_000.0, Jurisdiction::NewJersey);
        assert_eq!(tax.niit, 0.0);
    }

    #[test]
    fn test_state_approximation_by_jurisdiction() {
        let policy = TaxPolicy::year_2025();
        let gains = 100_000.0;

        let nyc = policy.capital_gains_tax(gains, 300_000.0, Jurisdiction::NewYorkCity);
        assert_relative_eq!(nyc.state, gains * (0.0685 + 0.03876), epsilon = 1e-6);

        let nj = policy.capital_gains_tax(gains, 300_000.0, Jurisdiction::NewJersey);
        assert_relative_eq!(nj.state, gains * 0.0897, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_gains_owe_nothing() {
        let policy = TaxPolicy::year_2025();
        let tax = policy.capital_gains_tax(0.0, 1_000_000.0, Jurisdiction::NewYorkCity);
        assert_eq!(tax.total(), 0.0);
    }
}
