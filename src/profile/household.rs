//! Household profile: input records for the lifestyle cost engines
//!
//! Two variants exist: the full `HouseholdProfile` drives the event-triggered
//! 30-year projection, and the coarser `QuickProfile` drives the amortized
//! single-point estimate. `HouseholdProfile::from_quick` upgrades one to the
//! other with sensible expansions.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Calendar year the projection starts from
pub fn current_calendar_year() -> i32 {
    Utc::now().year()
}

/// Gender of a child, which decides wedding cost treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Boy,
    Girl,
}

/// School election per child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolChoice {
    /// Full-tuition community day school
    Flagship,
    /// Lower-tuition community option
    Affordable,
    /// Private school outside the community
    OtherPrivate,
    /// Public school, no tuition
    Public,
}

impl SchoolChoice {
    pub fn is_private(&self) -> bool {
        !matches!(self, SchoolChoice::Public)
    }
}

/// Household help tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HelpLevel {
    None,
    /// Weekly cleaner
    Cleaning,
    /// Day worker, several days a week
    DayWorker,
    /// Five days a week
    FullTime,
    /// Live-in, including room and board value
    LiveIn,
}

/// Grocery spending tier (quick mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroceryStyle {
    Budget,
    Moderate,
    Premium,
}

/// Simcha spending tier, applied to bar/bat mitzvahs and weddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimchaStyle {
    Simple,
    Standard,
    Lavish,
}

/// Vehicle tier (quick mode cost basis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Economy,
    Suv,
    Luxury,
    HighEnd,
}

/// Pesach arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PesachStyle {
    Home,
    Catered,
    Hotel,
    Travel,
}

/// Occupancy situation for a residence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HousingSituation {
    Mortgage,
    PaidOff,
    Rent,
    /// Living with or in housing provided by family
    Family,
    /// No residence of this kind
    NotApplicable,
}

impl HousingSituation {
    pub fn occupied(&self) -> bool {
        !matches!(self, HousingSituation::NotApplicable)
    }
}

/// Household income bracket; projections use the midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeRange {
    /// [0, 150k)
    Under150k,
    /// [150k, 250k)
    From150kTo250k,
    /// [250k, 400k)
    From250kTo400k,
    /// [400k, 600k)
    From400kTo600k,
    /// [600k, 1M)
    From600kTo1M,
    /// [1M, Inf)
    Over1M,
}

impl IncomeRange {
    /// Midpoint used as the household income estimate
    pub fn midpoint(&self) -> f64 {
        match self {
            IncomeRange::Under150k => 125_000.0,
            IncomeRange::From150kTo250k => 200_000.0,
            IncomeRange::From250kTo400k => 325_000.0,
            IncomeRange::From400kTo600k => 500_000.0,
            IncomeRange::From600kTo1M => 800_000.0,
            IncomeRange::Over1M => 1_500_000.0,
        }
    }
}

/// A child, present or planned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Child {
    pub name: String,

    /// Birth year; may be in the future for a planned child
    pub birth_year: i32,

    pub gender: Gender,
    pub school: SchoolChoice,

    /// Age at which this child's wedding is expected
    pub expected_wedding_age: i32,
}

impl Child {
    /// Age in simulated year `year`; negative before the birth year
    pub fn age_in_year(&self, current_year: i32, year: u32) -> i32 {
        (current_year - self.birth_year) + year as i32
    }
}

/// A vehicle with its financing state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_type: VehicleType,
    pub monthly_payment: f64,
    pub paid_off: bool,
}

/// Plan for a year-round residence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryHousingPlan {
    pub situation: HousingSituation,
    pub monthly_cost: f64,

    /// Rent-to-buy transition: once the simulated calendar year reaches
    /// `purchase_year`, the post-purchase cost replaces the current one.
    pub plan_to_buy: bool,
    pub purchase_year: i32,
    pub post_purchase_monthly_cost: f64,
}

/// Plan for a seasonal (summer) residence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalHousingPlan {
    pub situation: HousingSituation,

    /// Annual lump cost of the season
    pub seasonal_cost: f64,

    pub plan_to_buy: bool,
    pub purchase_year: i32,

    /// Annual carrying cost after purchase
    pub post_purchase_cost: f64,
}

/// Full input record for the event-triggered 30-year lifestyle projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdProfile {
    /// Calendar year of simulated year 0
    pub current_year: i32,

    pub primary_housing: PrimaryHousingPlan,
    pub seasonal_housing: SeasonalHousingPlan,

    pub income_range: IncomeRange,

    /// Ongoing annual family support, added to the income midpoint
    pub annual_support: f64,

    pub children: Vec<Child>,

    /// Tuition assistance percentage, 0-100, applied to base tuition only
    pub tuition_assistance_pct: f64,
    pub tutoring_monthly: f64,
    pub include_israel_trip: bool,

    pub weekly_groceries: f64,
    pub dining_out_monthly: f64,

    /// Hosting frequency level 0-4 (never .. multiple times a week)
    pub hosting_level: u8,

    pub pesach_style: PesachStyle,
    pub pesach_cost: f64,

    pub annual_vacation_budget: f64,
    pub sleepaway_camp: bool,
    pub club_membership: bool,

    pub vehicles: Vec<Vehicle>,

    pub health_insurance_monthly: f64,
    pub other_insurance_annual: f64,

    /// Tzedakah as a percentage of household income, 0-100
    pub tzedakah_pct: f64,

    pub help_level: HelpLevel,

    /// Monthly nanny cost; steps down as the youngest child ages
    pub nanny_monthly: f64,

    pub simcha_style: SimchaStyle,
}

impl HouseholdProfile {
    /// Income midpoint plus support: the figure tzedakah and the income gap
    /// are measured against
    pub fn household_income(&self) -> f64 {
        self.income_range.midpoint() + self.annual_support
    }

    /// Age of the youngest already-born child in simulated year `year`
    pub fn youngest_child_age(&self, year: u32) -> Option<i32> {
        self.children
            .iter()
            .map(|c| c.age_in_year(self.current_year, year))
            .filter(|&age| age >= 0)
            .min()
    }

    /// Expand a quick-mode profile into a full household profile
    pub fn from_quick(quick: &QuickProfile) -> Self {
        let current_year = current_calendar_year();

        let weekly_groceries = match quick.grocery_style {
            GroceryStyle::Budget => 400.0,
            GroceryStyle::Moderate => 600.0,
            GroceryStyle::Premium => 900.0,
        };

        let children = quick
            .children
            .iter()
            .map(|c| Child {
                name: c.name.clone(),
                birth_year: current_year - c.age,
                gender: c.gender,
                school: c.school,
                expected_wedding_age: QuickProfile::ASSUMED_WEDDING_AGE,
            })
            .collect();

        let vehicles = (0..quick.vehicle_count)
            .map(|_| Vehicle {
                vehicle_type: quick.vehicle_type,
                monthly_payment: 500.0,
                paid_off: false,
            })
            .collect();

        Self {
            current_year,
            primary_housing: PrimaryHousingPlan {
                situation: if quick.housing == HousingChoice::Seasonal {
                    HousingSituation::NotApplicable
                } else {
                    HousingSituation::Rent
                },
                monthly_cost: if quick.housing == HousingChoice::Seasonal {
                    0.0
                } else {
                    5_000.0
                },
                ..Self::default().primary_housing
            },
            seasonal_housing: SeasonalHousingPlan {
                situation: if quick.housing == HousingChoice::Primary {
                    HousingSituation::NotApplicable
                } else {
                    HousingSituation::Rent
                },
                seasonal_cost: if quick.housing == HousingChoice::Primary {
                    0.0
                } else {
                    36_000.0
                },
                ..Self::default().seasonal_housing
            },
            children,
            vehicles,
            weekly_groceries,
            pesach_style: if quick.pesach_away {
                PesachStyle::Hotel
            } else {
                PesachStyle::Home
            },
            pesach_cost: if quick.pesach_away { 30_000.0 } else { 2_000.0 },
            help_level: quick.help_level,
            simcha_style: quick.simcha_style,
            hosting_level: quick.hosting_level,
            sleepaway_camp: quick.sleepaway_camp,
            club_membership: quick.club_membership,
            ..Self::default()
        }
    }
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        let current_year = current_calendar_year();
        Self {
            current_year,
            primary_housing: PrimaryHousingPlan {
                situation: HousingSituation::Rent,
                monthly_cost: 5_000.0,
                plan_to_buy: false,
                purchase_year: current_year + 3,
                post_purchase_monthly_cost: 8_000.0,
            },
            seasonal_housing: SeasonalHousingPlan {
                situation: HousingSituation::NotApplicable,
                seasonal_cost: 0.0,
                plan_to_buy: false,
                purchase_year: current_year + 5,
                post_purchase_cost: 25_000.0,
            },
            income_range: IncomeRange::From250kTo400k,
            annual_support: 0.0,
            children: Vec::new(),
            tuition_assistance_pct: 0.0,
            tutoring_monthly: 0.0,
            include_israel_trip: true,
            weekly_groceries: 600.0,
            dining_out_monthly: 800.0,
            hosting_level: 2,
            pesach_style: PesachStyle::Home,
            pesach_cost: 2_000.0,
            annual_vacation_budget: 10_000.0,
            sleepaway_camp: false,
            club_membership: false,
            vehicles: Vec::new(),
            health_insurance_monthly: 0.0,
            other_insurance_annual: 0.0,
            tzedakah_pct: 10.0,
            help_level: HelpLevel::None,
            nanny_monthly: 0.0,
            simcha_style: SimchaStyle::Standard,
        }
    }
}

/// Housing selection for quick mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HousingChoice {
    Primary,
    Seasonal,
    Both,
}

/// A child as described in quick mode: current age instead of birth year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickChild {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub school: SchoolChoice,
}

/// Coarse input record for the amortized single-point estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickProfile {
    pub housing: HousingChoice,
    pub children: Vec<QuickChild>,

    /// Adds an averaged estimate for one more future child
    pub planning_more: bool,

    pub help_level: HelpLevel,
    pub grocery_style: GroceryStyle,
    pub hosting_level: u8,
    pub simcha_style: SimchaStyle,
    pub vehicle_type: VehicleType,
    pub vehicle_count: u32,
    pub pesach_away: bool,
    pub sleepaway_camp: bool,
    pub club_membership: bool,
}

impl QuickProfile {
    /// Wedding age assumed when amortizing (real mode configures it per child)
    pub const ASSUMED_WEDDING_AGE: i32 = 25;

    /// Bar/bat mitzvah age used by both modes
    pub const MITZVAH_AGE: i32 = 13;
}

impl Default for QuickProfile {
    fn default() -> Self {
        Self {
            housing: HousingChoice::Primary,
            children: Vec::new(),
            planning_more: false,
            help_level: HelpLevel::None,
            grocery_style: GroceryStyle::Moderate,
            hosting_level: 2,
            simcha_style: SimchaStyle::Standard,
            vehicle_type: VehicleType::Suv,
            vehicle_count: 1,
            pesach_away: false,
            sleepaway_camp: false,
            club_membership: false,
        }
    }
}
