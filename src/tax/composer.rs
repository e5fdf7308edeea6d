//! Jurisdictional composer for ordinary income and payroll tax
//!
//! Combines federal, state, city, and FICA liability for a selected
//! jurisdiction. Ordinary tax is computed on income net of the jurisdiction's
//! standard deduction or exemption; FICA is always computed on gross wages.

use serde::{Deserialize, Serialize};

use super::TaxPolicy;
use crate::profile::Jurisdiction;

/// Federal/state/city ordinary-income tax, after deductions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OrdinaryTax {
    pub federal: f64,
    pub state: f64,
    pub city: f64,
}

impl OrdinaryTax {
    pub fn total(&self) -> f64 {
        self.federal + self.state + self.city
    }
}

/// Full working-year tax breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub federal: f64,
    pub state: f64,
    pub city: f64,
    pub fica: f64,
    pub total: f64,
}

impl TaxPolicy {
    /// Federal/state/city tax on ordinary income for a jurisdiction
    ///
    /// The jurisdiction's standard deduction (or exemption) is applied before
    /// the bracket walk, clamped at zero. No FICA: this is the path used for
    /// both wage income and retirement withdrawals.
    pub fn ordinary_tax(&self, taxable_income: f64, jurisdiction: Jurisdiction) -> OrdinaryTax {
        let income = taxable_income.max(0.0);
        let federal = self
            .federal
            .tax((income - self.deductions.federal_standard).max(0.0));

        let (state, city) = match jurisdiction {
            Jurisdiction::NewYorkCity => {
                let after_deduction = (income - self.deductions.new_york_standard).max(0.0);
                (
                    self.new_york_state.tax(after_deduction),
                    self.new_york_city.tax(after_deduction),
                )
            }
            Jurisdiction::NewJersey => {
                let after_exemption = (income - self.deductions.new_jersey_exemption).max(0.0);
                (self.new_jersey.tax(after_exemption), 0.0)
            }
        };

        OrdinaryTax { federal, state, city }
    }

    /// FICA on gross wages: Social Security up to the cap, Medicare on all
    /// wages plus the surtax above the high-income threshold
    pub fn fica_tax(&self, gross_wages: f64) -> f64 {
        let wages = gross_wages.max(0.0);
        let social_security =
            wages.min(self.fica.social_security_cap) * self.fica.social_security_rate;
        let medicare = wages * self.fica.medicare_rate
            + (wages - self.fica.medicare_surtax_threshold).max(0.0)
                * self.fica.medicare_surtax_rate;
        social_security + medicare
    }

    /// Total working-year liability: ordinary tax on taxable income plus FICA
    /// on gross wages
    pub fn total_tax(
        &self,
        taxable_income: f64,
        gross_wages: f64,
        jurisdiction: Jurisdiction,
    ) -> TaxBreakdown {
        let ordinary = self.ordinary_tax(taxable_income, jurisdiction);
        let fica = self.fica_tax(gross_wages);

        TaxBreakdown {
            federal: ordinary.federal,
            state: ordinary.state,
            city: ordinary.city,
            fica,
            total: ordinary.total() + fica,
        }
    }
}
