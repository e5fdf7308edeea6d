//! Lifestyle cost reference tables
//!
//! Benchmark unit costs in today's dollars, gathered into one container the
//! way tax reference data lives in `TaxPolicy`. Figures are annual unless a
//! field name says otherwise.

use serde::{Deserialize, Serialize};

use crate::profile::{HelpLevel, SchoolChoice, SimchaStyle, VehicleType};

/// Base tuition per school and the age multiplier curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuitionTable {
    pub flagship: f64,
    pub affordable: f64,
    pub other_private: f64,
}

impl TuitionTable {
    pub fn base(&self, school: SchoolChoice) -> f64 {
        match school {
            SchoolChoice::Flagship => self.flagship,
            SchoolChoice::Affordable => self.affordable,
            SchoolChoice::OtherPrivate => self.other_private,
            SchoolChoice::Public => 0.0,
        }
    }

    /// Grade-level multiplier applied to base tuition. Zero outside the
    /// enrolled ages 3 through 17.
    pub fn age_multiplier(age: i32) -> f64 {
        match age {
            3..=4 => 0.42,   // pre-K
            5 => 0.81,       // kindergarten
            6..=10 => 1.0,   // elementary baseline
            11..=13 => 1.17, // middle school
            14..=17 => 1.56, // high school
            _ => 0.0,
        }
    }

    /// Tuition for one child at `age`, rounded to whole dollars
    pub fn tuition(&self, age: i32, school: SchoolChoice) -> f64 {
        (self.base(school) * Self::age_multiplier(age)).round()
    }
}

/// Flat per-child fees charged by private schools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationFees {
    pub registration: f64,
    /// Charged from first grade (age 6) upward
    pub family_fee: f64,
    pub fundraising: f64,
    pub supplies_uniforms: f64,
    /// Eighth-grade Israel trip, once at age 13
    pub israel_trip: f64,
}

/// Household help cost per tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpCosts {
    pub cleaning: f64,
    pub day_worker: f64,
    pub full_time: f64,
    pub live_in: f64,
}

impl HelpCosts {
    pub fn annual(&self, level: HelpLevel) -> f64 {
        match level {
            HelpLevel::None => 0.0,
            HelpLevel::Cleaning => self.cleaning,
            HelpLevel::DayWorker => self.day_worker,
            HelpLevel::FullTime => self.full_time,
            HelpLevel::LiveIn => self.live_in,
        }
    }
}

/// Quick-mode housing and food benchmarks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousingCosts {
    /// Typical year-round community rent
    pub primary_annual: f64,
    /// Seasonal summer rental, three months
    pub seasonal_annual: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCosts {
    pub grocery_budget: f64,
    pub grocery_moderate: f64,
    pub grocery_premium: f64,
    /// Baseline assumes two adults and two children
    pub grocery_per_extra_child: f64,
    /// Cost of one hosted Shabbat meal
    pub hosting_per_event: f64,
    /// Hosted events per year by hosting level 0-4
    pub hosting_frequency: [u32; 5],
}

impl FoodCosts {
    pub fn hosting_events(&self, level: u8) -> u32 {
        self.hosting_frequency
            .get(level as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// One-time simcha costs by tier, plus the annual gift baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimchaCosts {
    pub bar_mitzvah: [f64; 3],
    /// Parents carry the full wedding for a daughter
    pub wedding_girl: [f64; 3],
    /// Engagement-side contribution for a son
    pub wedding_boy: [f64; 3],
    /// Gift-giving for attending others' simchas
    pub annual_gifts: f64,
}

impl SimchaCosts {
    fn tier(style: SimchaStyle) -> usize {
        match style {
            SimchaStyle::Simple => 0,
            SimchaStyle::Standard => 1,
            SimchaStyle::Lavish => 2,
        }
    }

    pub fn bar_mitzvah(&self, style: SimchaStyle) -> f64 {
        self.bar_mitzvah[Self::tier(style)]
    }

    pub fn wedding_girl(&self, style: SimchaStyle) -> f64 {
        self.wedding_girl[Self::tier(style)]
    }

    pub fn wedding_boy(&self, style: SimchaStyle) -> f64 {
        self.wedding_boy[Self::tier(style)]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportCosts {
    /// All-in annual cost per vehicle tier, used by quick mode
    pub economy: f64,
    pub suv: f64,
    pub luxury: f64,
    pub high_end: f64,
    /// Fixed per-car costs regardless of tier
    pub insurance_per_car: f64,
    pub gas_maintenance_per_car: f64,
}

impl TransportCosts {
    pub fn vehicle_annual(&self, vehicle_type: VehicleType) -> f64 {
        match vehicle_type {
            VehicleType::Economy => self.economy,
            VehicleType::Suv => self.suv,
            VehicleType::Luxury => self.luxury,
            VehicleType::HighEnd => self.high_end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtrasCosts {
    /// Family Pesach program
    pub pesach_program: f64,
    /// Per child, full summer, ages 8-16
    pub sleepaway_camp: f64,
    /// Per child, ages 4-7
    pub day_camp: f64,
    pub club_membership: f64,
}

/// All lifestyle benchmarks for one reference year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleCosts {
    pub tuition: TuitionTable,
    pub education_fees: EducationFees,
    pub help: HelpCosts,
    pub housing: HousingCosts,
    pub food: FoodCosts,
    pub simchas: SimchaCosts,
    pub transport: TransportCosts,
    pub extras: ExtrasCosts,
}

impl LifestyleCosts {
    /// 2025 benchmark figures
    pub fn benchmark_2025() -> Self {
        Self {
            tuition: TuitionTable {
                flagship: 28_250.0,
                affordable: 19_775.0,
                other_private: 25_000.0,
            },
            education_fees: EducationFees {
                registration: 1_500.0,
                family_fee: 2_000.0,
                fundraising: 1_000.0,
                supplies_uniforms: 750.0,
                israel_trip: 5_500.0,
            },
            help: HelpCosts {
                cleaning: 7_200.0,
                day_worker: 31_200.0,
                full_time: 62_400.0,
                live_in: 40_000.0,
            },
            housing: HousingCosts {
                primary_annual: 90_000.0,
                seasonal_annual: 36_000.0,
            },
            food: FoodCosts {
                grocery_budget: 18_000.0,
                grocery_moderate: 30_000.0,
                grocery_premium: 48_000.0,
                grocery_per_extra_child: 4_800.0,
                hosting_per_event: 350.0,
                hosting_frequency: [0, 12, 26, 52, 104],
            },
            simchas: SimchaCosts {
                bar_mitzvah: [15_000.0, 45_000.0, 120_000.0],
                wedding_girl: [175_000.0, 300_000.0, 450_000.0],
                wedding_boy: [15_000.0, 27_500.0, 42_500.0],
                annual_gifts: 3_500.0,
            },
            transport: TransportCosts {
                economy: 10_000.0,
                suv: 15_000.0,
                luxury: 24_000.0,
                high_end: 36_000.0,
                insurance_per_car: 2_400.0,
                gas_maintenance_per_car: 3_600.0,
            },
            extras: ExtrasCosts {
                pesach_program: 30_000.0,
                sleepaway_camp: 9_000.0,
                day_camp: 4_000.0,
                club_membership: 20_000.0,
            },
        }
    }
}

impl Default for LifestyleCosts {
    fn default() -> Self {
        Self::benchmark_2025()
    }
}
