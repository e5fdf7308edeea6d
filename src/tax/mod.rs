//! Tax reference data and jurisdictional composers

mod brackets;
mod capital_gains;
mod composer;
mod tables;

pub use brackets::{BracketTable, TaxBracket};
pub use capital_gains::CapitalGainsTax;
pub use composer::{OrdinaryTax, TaxBreakdown};
pub use tables::{CapitalGainsRates, Deductions, FicaRates, IrsLimits};

/// Container for all tax reference data, versioned to a single tax year
#[derive(Debug, Clone)]
pub struct TaxPolicy {
    pub federal: BracketTable,
    pub new_york_state: BracketTable,
    pub new_york_city: BracketTable,
    pub new_jersey: BracketTable,
    pub deductions: Deductions,
    pub fica: FicaRates,
    pub capital_gains: CapitalGainsRates,
    pub limits: IrsLimits,
}

impl TaxPolicy {
    /// Reference data for tax year 2025 (married filing jointly)
    pub fn year_2025() -> Self {
        Self {
            federal: tables::federal_2025(),
            new_york_state: tables::new_york_state_2025(),
            new_york_city: tables::new_york_city_2025(),
            new_jersey: tables::new_jersey_2025(),
            deductions: Deductions::default(),
            fica: FicaRates::default(),
            capital_gains: CapitalGainsRates::default(),
            limits: IrsLimits::default(),
        }
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::year_2025()
    }
}
