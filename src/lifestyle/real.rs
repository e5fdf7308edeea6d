//! Event-triggered 30-year lifestyle projection
//!
//! Nine independent cost categories evaluated per year from the household
//! profile, with one-time costs landing in the year their triggering age or
//! calendar year is reached.

use serde::{Deserialize, Serialize};

use crate::profile::{Gender, HouseholdProfile};

use super::costs::LifestyleCosts;
use super::events::{events_for_year, LifeEvent};

/// Length of the projection in years
pub const HORIZON_YEARS: u32 = 30;

/// Per-category annual costs for one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryCosts {
    pub housing: f64,
    pub education: f64,
    pub childcare: f64,
    pub food: f64,
    pub simchas: f64,
    pub transportation: f64,
    pub insurance: f64,
    pub tzedakah: f64,
    pub extras: f64,
}

impl CategoryCosts {
    pub fn total(&self) -> f64 {
        self.housing
            + self.education
            + self.childcare
            + self.food
            + self.simchas
            + self.transportation
            + self.insurance
            + self.tzedakah
            + self.extras
    }
}

/// One simulated year of costs and events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub costs: CategoryCosts,
    pub total_annual: f64,
    pub events: Vec<LifeEvent>,
}

/// Lifestyle projection engine
pub struct LifestyleEngine {
    costs: LifestyleCosts,
}

impl LifestyleEngine {
    pub fn new(costs: LifestyleCosts) -> Self {
        Self { costs }
    }

    /// Project all cost categories over the full horizon
    pub fn project(&self, profile: &HouseholdProfile) -> Vec<ProjectionYear> {
        (0..HORIZON_YEARS)
            .map(|year| {
                let costs = self.year_costs(profile, year);
                ProjectionYear {
                    year,
                    total_annual: costs.total(),
                    costs,
                    events: events_for_year(profile, year),
                }
            })
            .collect()
    }

    pub fn year_costs(&self, profile: &HouseholdProfile, year: u32) -> CategoryCosts {
        CategoryCosts {
            housing: self.housing(profile, year),
            education: self.education(profile, year),
            childcare: self.childcare(profile, year),
            food: self.food(profile),
            simchas: self.simchas(profile, year),
            transportation: self.transportation(profile),
            insurance: self.insurance(profile),
            tzedakah: self.tzedakah(profile),
            extras: self.extras(profile, year),
        }
    }

    /// Primary plus seasonal residence, each stepping to its post-purchase
    /// cost once the simulated calendar year reaches the purchase year
    fn housing(&self, profile: &HouseholdProfile, year: u32) -> f64 {
        let calendar_year = profile.current_year + year as i32;
        let mut total = 0.0;

        let primary = &profile.primary_housing;
        if primary.situation.occupied() {
            if primary.plan_to_buy && calendar_year >= primary.purchase_year {
                total += primary.post_purchase_monthly_cost * 12.0;
            } else {
                total += primary.monthly_cost * 12.0;
            }
        }

        let seasonal = &profile.seasonal_housing;
        if seasonal.situation.occupied() {
            if seasonal.plan_to_buy && calendar_year >= seasonal.purchase_year {
                total += seasonal.post_purchase_cost;
            } else {
                total += seasonal.seasonal_cost;
            }
        }

        total
    }

    /// Tuition with assistance applied, flat private-school fees, the Israel
    /// trip year, and tutoring. Children enter at age 2, when fees apply but
    /// the tuition multiplier is still zero.
    fn education(&self, profile: &HouseholdProfile, year: u32) -> f64 {
        let assistance = (100.0 - profile.tuition_assistance_pct) / 100.0;
        let fees = &self.costs.education_fees;
        let mut total = 0.0;

        for child in &profile.children {
            let age = child.age_in_year(profile.current_year, year);
            if !(2..=17).contains(&age) {
                continue;
            }

            total += self.costs.tuition.tuition(age, child.school) * assistance;

            if child.school.is_private() {
                total += fees.registration + fees.fundraising + fees.supplies_uniforms;
                if age >= 6 {
                    total += fees.family_fee;
                }
                if age == 13 && profile.include_israel_trip {
                    total += fees.israel_trip;
                }
            }
        }

        total + profile.tutoring_monthly * 12.0
    }

    /// Help tier plus nanny, the nanny stepping down as the youngest child
    /// ages out of needing one
    fn childcare(&self, profile: &HouseholdProfile, year: u32) -> f64 {
        let nanny_factor = match profile.youngest_child_age(year) {
            Some(age) if age < 5 => 1.0,
            Some(age) if age < 8 => 0.75,
            Some(age) if age < 13 => 0.5,
            _ => 0.0,
        };

        self.costs.help.annual(profile.help_level) + profile.nanny_monthly * 12.0 * nanny_factor
    }

    fn food(&self, profile: &HouseholdProfile) -> f64 {
        let events = self.costs.food.hosting_events(profile.hosting_level);

        profile.weekly_groceries * 52.0
            + profile.dining_out_monthly * 12.0
            + events as f64 * self.costs.food.hosting_per_event
            + profile.pesach_cost
    }

    /// Gift baseline every year; bar/bat mitzvah at 13 and wedding at each
    /// child's expected age land as lump sums
    fn simchas(&self, profile: &HouseholdProfile, year: u32) -> f64 {
        let simchas = &self.costs.simchas;
        let mut total = simchas.annual_gifts;

        for child in &profile.children {
            let age = child.age_in_year(profile.current_year, year);

            if age == 13 {
                total += simchas.bar_mitzvah(profile.simcha_style);
            }

            if age == child.expected_wedding_age {
                total += match child.gender {
                    Gender::Girl => simchas.wedding_girl(profile.simcha_style),
                    Gender::Boy => simchas.wedding_boy(profile.simcha_style),
                };
            }
        }

        total
    }

    fn transportation(&self, profile: &HouseholdProfile) -> f64 {
        let transport = &self.costs.transport;

        profile
            .vehicles
            .iter()
            .map(|vehicle| {
                let payments = if vehicle.paid_off {
                    0.0
                } else {
                    vehicle.monthly_payment * 12.0
                };
                payments + transport.insurance_per_car + transport.gas_maintenance_per_car
            })
            .sum()
    }

    fn insurance(&self, profile: &HouseholdProfile) -> f64 {
        profile.health_insurance_monthly * 12.0 + profile.other_insurance_annual
    }

    fn tzedakah(&self, profile: &HouseholdProfile) -> f64 {
        (profile.household_income() * profile.tzedakah_pct / 100.0).round()
    }

    fn extras(&self, profile: &HouseholdProfile, year: u32) -> f64 {
        let mut total = profile.annual_vacation_budget;

        if profile.sleepaway_camp {
            for child in &profile.children {
                let age = child.age_in_year(profile.current_year, year);
                if (8..=16).contains(&age) {
                    total += self.costs.extras.sleepaway_camp;
                } else if (4..=7).contains(&age) {
                    total += self.costs.extras.day_camp;
                }
            }
        }

        if profile.club_membership {
            total += self.costs.extras.club_membership;
        }

        total
    }
}

impl Default for LifestyleEngine {
    fn default() -> Self {
        Self::new(LifestyleCosts::benchmark_2025())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{
        Child, HousingSituation, SchoolChoice, SimchaStyle, Vehicle, VehicleType,
    };

    fn bare_profile() -> HouseholdProfile {
        HouseholdProfile {
            current_year: 2026,
            children: Vec::new(),
            weekly_groceries: 0.0,
            dining_out_monthly: 0.0,
            hosting_level: 0,
            pesach_cost: 0.0,
            annual_vacation_budget: 0.0,
            tutoring_monthly: 0.0,
            tzedakah_pct: 0.0,
            annual_support: 0.0,
            ..Default::default()
        }
    }

    fn child(birth_year: i32, gender: Gender, school: SchoolChoice) -> Child {
        Child {
            name: "Child".to_string(),
            birth_year,
            gender,
            school,
            expected_wedding_age: 25,
        }
    }

    #[test]
    fn test_bare_profile_leaves_only_the_gift_baseline_and_rent() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.primary_housing.situation = HousingSituation::NotApplicable;

        let costs = engine.year_costs(&profile, 0);
        assert_eq!(costs.simchas, 3_500.0);
        assert_eq!(costs.housing, 0.0);
        assert_eq!(costs.education, 0.0);
        assert_eq!(costs.childcare, 0.0);
        assert_eq!(costs.food, 0.0);
        assert_eq!(costs.transportation, 0.0);
        assert_eq!(costs.insurance, 0.0);
        assert_eq!(costs.tzedakah, 0.0);
        assert_eq!(costs.extras, 0.0);
        assert_eq!(costs.total(), 3_500.0);
    }

    #[test]
    fn test_bar_mitzvah_lump_lands_in_exactly_one_year() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        // Aged 13 in year 0
        profile.children = vec![child(2013, Gender::Boy, SchoolChoice::Public)];
        profile.simcha_style = SimchaStyle::Standard;

        assert_eq!(engine.year_costs(&profile, 0).simchas, 48_500.0);
        assert_eq!(engine.year_costs(&profile, 1).simchas, 3_500.0);
    }

    #[test]
    fn test_wedding_cost_depends_on_gender() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.children = vec![
            child(2010, Gender::Girl, SchoolChoice::Public),
            child(2010, Gender::Boy, SchoolChoice::Public),
        ];

        // Both children turn 25 in year 9
        let simchas = engine.year_costs(&profile, 9).simchas;
        assert_eq!(simchas, 3_500.0 + 300_000.0 + 27_500.0);
    }

    #[test]
    fn test_housing_steps_at_the_purchase_year() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.primary_housing.situation = HousingSituation::Rent;
        profile.primary_housing.monthly_cost = 5_000.0;
        profile.primary_housing.plan_to_buy = true;
        profile.primary_housing.purchase_year = 2030;
        profile.primary_housing.post_purchase_monthly_cost = 8_000.0;

        assert_eq!(engine.year_costs(&profile, 3).housing, 60_000.0);
        assert_eq!(engine.year_costs(&profile, 4).housing, 96_000.0);
        assert_eq!(engine.year_costs(&profile, 10).housing, 96_000.0);
    }

    #[test]
    fn test_two_year_old_pays_fees_but_no_tuition() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.children = vec![child(2024, Gender::Girl, SchoolChoice::Flagship)];

        // Age 2: registration + fundraising + supplies, no family fee
        assert_eq!(engine.year_costs(&profile, 0).education, 3_250.0);
        // Age 1: out of the band entirely
        profile.children[0].birth_year = 2025;
        assert_eq!(engine.year_costs(&profile, 0).education, 0.0);
    }

    #[test]
    fn test_tuition_assistance_reduces_base_tuition_only() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        // Aged 7 in year 0: elementary baseline
        profile.children = vec![child(2019, Gender::Boy, SchoolChoice::Flagship)];
        profile.tuition_assistance_pct = 50.0;

        // 28,250 * 0.5 + 1,500 + 1,000 + 750 + 2,000
        assert_eq!(engine.year_costs(&profile, 0).education, 19_375.0);
    }

    #[test]
    fn test_israel_trip_only_at_thirteen_for_private_school() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.children = vec![child(2013, Gender::Boy, SchoolChoice::Flagship)];
        profile.include_israel_trip = true;

        let at_13 = engine.year_costs(&profile, 0).education;
        profile.include_israel_trip = false;
        let without = engine.year_costs(&profile, 0).education;
        assert_eq!(at_13 - without, 5_500.0);

        profile.children[0].school = SchoolChoice::Public;
        profile.include_israel_trip = true;
        assert_eq!(engine.year_costs(&profile, 0).education, 0.0);
    }

    #[test]
    fn test_nanny_steps_down_with_youngest_child_age() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.nanny_monthly = 1_000.0;
        profile.children = vec![child(2024, Gender::Girl, SchoolChoice::Public)];

        // Youngest aged 2, 5, 10, then 13
        assert_eq!(engine.year_costs(&profile, 0).childcare, 12_000.0);
        assert_eq!(engine.year_costs(&profile, 3).childcare, 9_000.0);
        assert_eq!(engine.year_costs(&profile, 8).childcare, 6_000.0);
        assert_eq!(engine.year_costs(&profile, 11).childcare, 0.0);
    }

    #[test]
    fn test_nanny_needs_a_born_child() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.nanny_monthly = 1_000.0;
        profile.children = vec![child(2030, Gender::Girl, SchoolChoice::Public)];

        assert_eq!(engine.year_costs(&profile, 0).childcare, 0.0);
        // Born in year 4, nanny resumes
        assert_eq!(engine.year_costs(&profile, 4).childcare, 12_000.0);
    }

    #[test]
    fn test_camp_ages_split_between_day_and_sleepaway() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.sleepaway_camp = true;
        profile.children = vec![child(2021, Gender::Boy, SchoolChoice::Public)];

        // Age 5: day camp band starts at 4
        assert_eq!(engine.year_costs(&profile, 0).extras, 4_000.0);
        // Age 8: sleepaway
        assert_eq!(engine.year_costs(&profile, 3).extras, 9_000.0);
        // Age 17: aged out
        assert_eq!(engine.year_costs(&profile, 12).extras, 0.0);
    }

    #[test]
    fn test_paid_off_vehicle_keeps_fixed_costs_only() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.vehicles = vec![
            Vehicle {
                vehicle_type: VehicleType::Suv,
                monthly_payment: 600.0,
                paid_off: false,
            },
            Vehicle {
                vehicle_type: VehicleType::Economy,
                monthly_payment: 400.0,
                paid_off: true,
            },
        ];

        // 600*12 + 6,000 fixed for the first, fixed only for the second
        assert_eq!(engine.year_costs(&profile, 0).transportation, 19_200.0);
    }

    #[test]
    fn test_tzedakah_follows_income_midpoint_plus_support() {
        let engine = LifestyleEngine::default();
        let mut profile = bare_profile();
        profile.tzedakah_pct = 10.0;
        profile.annual_support = 25_000.0;

        // Midpoint 325,000 + 25,000 support
        assert_eq!(engine.year_costs(&profile, 0).tzedakah, 35_000.0);
    }

    #[test]
    fn test_projection_spans_thirty_years() {
        let engine = LifestyleEngine::default();
        let years = engine.project(&HouseholdProfile::default());
        assert_eq!(years.len(), 30);
        assert_eq!(years[0].year, 0);
        assert_eq!(years[29].year, 29);
        for y in &years {
            assert_eq!(y.total_annual, y.costs.total());
        }
    }
}
