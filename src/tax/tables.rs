//! Tax year 2025 reference data
//!
//! All brackets, deductions, rates, caps, and contribution limits are
//! hardcoded to tax year 2025 (married filing jointly where filing status
//! matters). Illustrative planning data, not compliance-grade.

use serde::{Deserialize, Serialize};

use super::brackets::BracketTable;

/// Federal ordinary-income brackets, 2025 MFJ
pub fn federal_2025() -> BracketTable {
    BracketTable::from_rows(&[
        (0.0, 23_850.0, 0.10),
        (23_850.0, 96_950.0, 0.12),
        (96_950.0, 206_700.0, 0.22),
        (206_700.0, 394_600.0, 0.24),
        (394_600.0, 501_050.0, 0.32),
        (501_050.0, 751_600.0, 0.35),
        (751_600.0, f64::INFINITY, 0.37),
    ])
}

/// New York State brackets, 2025
pub fn new_york_state_2025() -> BracketTable {
    BracketTable::from_rows(&[
        (0.0, 17_150.0, 0.04),
        (17_150.0, 23_600.0, 0.045),
        (23_600.0, 27_900.0, 0.0525),
        (27_900.0, 161_550.0, 0.0585),
        (161_550.0, 323_200.0, 0.0625),
        (323_200.0, 2_155_350.0, 0.0685),
        (2_155_350.0, 5_000_000.0, 0.0965),
        (5_000_000.0, 25_000_000.0, 0.103),
        (25_000_000.0, f64::INFINITY, 0.109),
    ])
}

/// New York City resident brackets, 2025
pub fn new_york_city_2025() -> BracketTable {
    BracketTable::from_rows(&[
        (0.0, 12_000.0, 0.03078),
        (12_000.0, 25_000.0, 0.03762),
        (25_000.0, 50_000.0, 0.03819),
        (50_000.0, f64::INFINITY, 0.03876),
    ])
}

/// New Jersey brackets, 2025 MFJ
pub fn new_jersey_2025() -> BracketTable {
    BracketTable::from_rows(&[
        (0.0, 20_000.0, 0.014),
        (20_000.0, 35_000.0, 0.0175),
        (35_000.0, 40_000.0, 0.035),
        (40_000.0, 75_000.0, 0.05525),
        (75_000.0, 500_000.0, 0.0637),
        (500_000.0, 1_000_000.0, 0.0897),
        (1_000_000.0, f64::INFINITY, 0.1075),
    ])
}

/// Standard deductions / exemptions applied before the bracket walk
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Deductions {
    /// Federal standard deduction (MFJ)
    pub federal_standard: f64,

    /// New York standard deduction, used for both state and city tax
    pub new_york_standard: f64,

    /// New Jersey personal exemptions (two filers)
    pub new_jersey_exemption: f64,
}

impl Default for Deductions {
    fn default() -> Self {
        Self {
            federal_standard: 30_000.0,
            new_york_standard: 16_050.0,
            new_jersey_exemption: 2_000.0,
        }
    }
}

/// FICA rates and caps, 2025
///
/// Always computed on gross wages, never on income reduced by pre-tax
/// deductions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FicaRates {
    /// Social Security rate up to the wage cap
    pub social_security_rate: f64,

    /// Social Security wage cap
    pub social_security_cap: f64,

    /// Medicare rate on all wages
    pub medicare_rate: f64,

    /// Additional Medicare surtax rate above the threshold
    pub medicare_surtax_rate: f64,

    /// Wage threshold for the additional Medicare surtax
    pub medicare_surtax_threshold: f64,
}

impl Default for FicaRates {
    fn default() -> Self {
        Self {
            social_security_rate: 0.062,
            social_security_cap: 176_100.0,
            medicare_rate: 0.0145,
            medicare_surtax_rate: 0.009,
            medicare_surtax_threshold: 250_000.0,
        }
    }
}

/// Long-term capital gains and NIIT parameters, 2025 MFJ
///
/// The federal rate is selected from income-inclusive thresholds: the
/// applicable bracket depends on ordinary income plus gains, not gains alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapitalGainsRates {
    /// Total income at or below this owes 0% federal LTCG
    pub zero_bracket_max: f64,

    /// Total income at or below this owes the mid rate
    pub mid_bracket_max: f64,

    /// Mid federal LTCG rate
    pub mid_rate: f64,

    /// Top federal LTCG rate
    pub top_rate: f64,

    /// MAGI threshold for the Net Investment Income Tax
    pub niit_threshold: f64,

    /// NIIT rate
    pub niit_rate: f64,

    /// Flat approximation for NY State tax on gains (taxed as ordinary income)
    pub new_york_state_rate: f64,

    /// Flat approximation for NYC tax on gains
    pub new_york_city_rate: f64,

    /// Flat approximation for NJ tax on gains
    pub new_jersey_rate: f64,
}

impl Default for CapitalGainsRates {
    fn default() -> Self {
        Self {
            zero_bracket_max: 96_700.0,
            mid_bracket_max: 600_050.0,
            mid_rate: 0.15,
            top_rate: 0.20,
            niit_threshold: 250_000.0,
            niit_rate: 0.038,
            new_york_state_rate: 0.0685,
            new_york_city_rate: 0.03876,
            new_jersey_rate: 0.0897,
        }
    }
}

/// IRS contribution limits, 2025, per person unless noted
///
/// Advisory reference only: the engines compute with whatever contribution
/// values they are given, and limit checks surface as warnings, never errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IrsLimits {
    /// Employee 401k deferral limit
    pub employee_401k: f64,

    /// Combined employee + employer 401k limit
    pub total_401k: f64,

    /// HSA family limit (per household)
    pub hsa_family: f64,

    /// Backdoor Roth IRA limit
    pub backdoor_roth: f64,

    /// Approximate mega-backdoor headroom (total limit minus deferral)
    pub mega_backdoor: f64,

    /// Dependent care FSA limit (per household)
    pub dependent_care_fsa: f64,
}

impl Default for IrsLimits {
    fn default() -> Self {
        Self {
            employee_401k: 23_500.0,
            total_401k: 70_000.0,
            hsa_family: 8_550.0,
            backdoor_roth: 7_000.0,
            mega_backdoor: 46_500.0,
            dependent_care_fsa: 5_000.0,
        }
    }
}
