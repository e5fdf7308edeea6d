//! Amortized single-point lifestyle estimate
//!
//! The coarse companion of the 30-year projection: one annual figure from a
//! handful of tier choices, with future one-time simchas spread evenly over
//! the years until they happen.

use serde::{Deserialize, Serialize};

use crate::profile::{Gender, GroceryStyle, HousingChoice, QuickProfile};

use super::costs::LifestyleCosts;

/// Per-category costs of the quick estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickCategoryCosts {
    pub housing: f64,
    pub education: f64,
    pub childcare: f64,
    pub food: f64,
    pub simchas: f64,
    pub transportation: f64,
    pub extras: f64,
}

impl QuickCategoryCosts {
    pub fn total(&self) -> f64 {
        self.housing
            + self.education
            + self.childcare
            + self.food
            + self.simchas
            + self.transportation
            + self.extras
    }
}

/// Single-point annual cost estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickEstimate {
    pub total_annual: f64,
    pub total_monthly: f64,
    pub categories: QuickCategoryCosts,
}

/// Quick-mode estimator
pub struct QuickEstimator {
    costs: LifestyleCosts,
}

impl QuickEstimator {
    pub fn new(costs: LifestyleCosts) -> Self {
        Self { costs }
    }

    pub fn estimate(&self, profile: &QuickProfile) -> QuickEstimate {
        let categories = QuickCategoryCosts {
            housing: self.housing(profile),
            education: self.education(profile),
            childcare: self.costs.help.annual(profile.help_level),
            food: self.food(profile),
            simchas: self.simchas(profile),
            transportation: self.transportation(profile),
            extras: self.extras(profile),
        };
        let total_annual = categories.total();

        QuickEstimate {
            total_annual,
            total_monthly: (total_annual / 12.0).round(),
            categories,
        }
    }

    fn housing(&self, profile: &QuickProfile) -> f64 {
        match profile.housing {
            HousingChoice::Primary => self.costs.housing.primary_annual,
            HousingChoice::Seasonal => self.costs.housing.seasonal_annual,
            HousingChoice::Both => {
                self.costs.housing.primary_annual + self.costs.housing.seasonal_annual
            }
        }
    }

    /// Tuition and fees for currently enrolled children, ages 3 through 17
    fn education(&self, profile: &QuickProfile) -> f64 {
        let fees = &self.costs.education_fees;
        let mut total = 0.0;

        for child in &profile.children {
            if !(3..=17).contains(&child.age) {
                continue;
            }

            total += self.costs.tuition.tuition(child.age, child.school);

            if child.school.is_private() {
                total += fees.registration + fees.fundraising + fees.supplies_uniforms;
                if child.age >= 6 {
                    total += fees.family_fee;
                }
            }
        }

        total
    }

    fn food(&self, profile: &QuickProfile) -> f64 {
        let food = &self.costs.food;

        let mut total = match profile.grocery_style {
            GroceryStyle::Budget => food.grocery_budget,
            GroceryStyle::Moderate => food.grocery_moderate,
            GroceryStyle::Premium => food.grocery_premium,
        };

        // Grocery baseline assumes two children
        let extra_children = profile.children.len().saturating_sub(2);
        total += extra_children as f64 * food.grocery_per_extra_child;

        total += food.hosting_events(profile.hosting_level) as f64 * food.hosting_per_event;
        total
    }

    /// Gift baseline plus each future simcha amortized over the years until
    /// the child reaches its age
    fn simchas(&self, profile: &QuickProfile) -> f64 {
        let simchas = &self.costs.simchas;
        let style = profile.simcha_style;
        let mut total = simchas.annual_gifts;

        for child in &profile.children {
            if child.age < QuickProfile::MITZVAH_AGE {
                let years = (QuickProfile::MITZVAH_AGE - child.age).max(1);
                total += (simchas.bar_mitzvah(style) / years as f64).round();
            }

            if child.age < QuickProfile::ASSUMED_WEDDING_AGE {
                let years = (QuickProfile::ASSUMED_WEDDING_AGE - child.age).max(1);
                let wedding = match child.gender {
                    Gender::Girl => simchas.wedding_girl(style),
                    Gender::Boy => simchas.wedding_boy(style),
                };
                total += (wedding / years as f64).round();
            }
        }

        // One more hypothetical child, gender averaged
        if profile.planning_more {
            let avg_wedding = (simchas.wedding_girl(style) + simchas.wedding_boy(style)) / 2.0;
            total += (simchas.bar_mitzvah(style) / QuickProfile::MITZVAH_AGE as f64).round();
            total += (avg_wedding / QuickProfile::ASSUMED_WEDDING_AGE as f64).round();
        }

        total
    }

    fn transportation(&self, profile: &QuickProfile) -> f64 {
        let transport = &self.costs.transport;
        let per_car = transport.vehicle_annual(profile.vehicle_type)
            + transport.insurance_per_car
            + transport.gas_maintenance_per_car;

        profile.vehicle_count as f64 * per_car
    }

    fn extras(&self, profile: &QuickProfile) -> f64 {
        let extras = &self.costs.extras;
        let mut total = 0.0;

        if profile.pesach_away {
            total += extras.pesach_program;
        }

        if profile.sleepaway_camp {
            for child in &profile.children {
                if (8..=16).contains(&child.age) {
                    total += extras.sleepaway_camp;
                } else if (4..=7).contains(&child.age) {
                    total += extras.day_camp;
                }
            }
        }

        if profile.club_membership {
            total += extras.club_membership;
        }

        total
    }
}

impl Default for QuickEstimator {
    fn default() -> Self {
        Self::new(LifestyleCosts::benchmark_2025())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{QuickChild, SchoolChoice, SimchaStyle, VehicleType};

    fn quick_child(age: i32, gender: Gender, school: SchoolChoice) -> QuickChild {
        QuickChild {
            name: format!("Child aged {age}"),
            age,
            gender,
            school,
        }
    }

    fn bare_quick() -> QuickProfile {
        QuickProfile {
            housing: HousingChoice::Primary,
            children: Vec::new(),
            grocery_style: GroceryStyle::Budget,
            hosting_level: 0,
            vehicle_count: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_housing_choices() {
        let estimator = QuickEstimator::default();
        let mut profile = bare_quick();

        assert_eq!(estimator.estimate(&profile).categories.housing, 90_000.0);
        profile.housing = HousingChoice::Seasonal;
        assert_eq!(estimator.estimate(&profile).categories.housing, 36_000.0);
        profile.housing = HousingChoice::Both;
        assert_eq!(estimator.estimate(&profile).categories.housing, 126_000.0);
    }

    #[test]
    fn test_simchas_amortize_over_years_to_event() {
        let estimator = QuickEstimator::default();
        let mut profile = bare_quick();
        profile.simcha_style = SimchaStyle::Standard;
        // Girl aged 3: bar mitzvah in 10 years, wedding in 22
        profile.children = vec![quick_child(3, Gender::Girl, SchoolChoice::Public)];

        let expected = 3_500.0 + (45_000.0f64 / 10.0).round() + (300_000.0f64 / 22.0).round();
        assert_eq!(estimator.estimate(&profile).categories.simchas, expected);
    }

    #[test]
    fn test_simcha_amortization_floors_at_one_year() {
        let estimator = QuickEstimator::default();
        let mut profile = bare_quick();
        profile.simcha_style = SimchaStyle::Simple;
        // Boy aged 24: wedding next year, full cost in one year
        profile.children = vec![quick_child(24, Gender::Boy, SchoolChoice::Public)];

        assert_eq!(
            estimator.estimate(&profile).categories.simchas,
            3_500.0 + 15_000.0
        );
    }

    #[test]
    fn test_past_events_stop_amortizing() {
        let estimator = QuickEstimator::default();
        let mut profile = bare_quick();
        // Aged 26: both milestones behind them
        profile.children = vec![quick_child(26, Gender::Girl, SchoolChoice::Public)];

        assert_eq!(estimator.estimate(&profile).categories.simchas, 3_500.0);
    }

    #[test]
    fn test_planning_more_adds_an_averaged_child() {
        let estimator = QuickEstimator::default();
        let mut profile = bare_quick();
        profile.simcha_style = SimchaStyle::Standard;
        profile.planning_more = true;

        let expected = 3_500.0
            + (45_000.0f64 / 13.0).round()
            + ((300_000.0 + 27_500.0) / 2.0f64 / 25.0).round();
        assert_eq!(estimator.estimate(&profile).categories.simchas, expected);
    }

    #[test]
    fn test_grocery_baseline_covers_two_children() {
        let estimator = QuickEstimator::default();
        let mut profile = bare_quick();
        profile.children = vec![
            quick_child(1, Gender::Boy, SchoolChoice::Public),
            quick_child(2, Gender::Girl, SchoolChoice::Public),
        ];

        let two_kids = estimator.estimate(&profile).categories.food;
        profile
            .children
            .push(quick_child(0, Gender::Boy, SchoolChoice::Public));
        let three_kids = estimator.estimate(&profile).categories.food;

        assert_eq!(two_kids, 18_000.0);
        assert_eq!(three_kids - two_kids, 4_800.0);
    }

    #[test]
    fn test_education_band_starts_at_three() {
        let estimator = QuickEstimator::default();
        let mut profile = bare_quick();
        profile.children = vec![quick_child(2, Gender::Boy, SchoolChoice::Flagship)];

        assert_eq!(estimator.estimate(&profile).categories.education, 0.0);

        profile.children[0].age = 3;
        // 28,250 * 0.42 rounded + registration + fundraising + supplies
        assert_eq!(
            estimator.estimate(&profile).categories.education,
            11_865.0 + 3_250.0
        );
    }

    #[test]
    fn test_transport_uses_tier_cost_not_payments() {
        let estimator = QuickEstimator::default();
        let mut profile = bare_quick();
        profile.vehicle_type = VehicleType::Luxury;
        profile.vehicle_count = 2;

        assert_eq!(
            estimator.estimate(&profile).categories.transportation,
            2.0 * (24_000.0 + 2_400.0 + 3_600.0)
        );
    }

    #[test]
    fn test_monthly_is_annual_over_twelve() {
        let estimator = QuickEstimator::default();
        let estimate = estimator.estimate(&bare_quick());

        assert_eq!(
            estimate.total_monthly,
            (estimate.total_annual / 12.0).round()
        );
        assert_eq!(estimate.total_annual, estimate.categories.total());
    }
}
