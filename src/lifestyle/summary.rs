//! Projection aggregation and insights
//!
//! Rolls a 30-year cost projection up into headline numbers and a short list
//! of human-readable observations.

use serde::{Deserialize, Serialize};

use crate::profile::{Gender, HouseholdProfile};

use super::costs::LifestyleCosts;
use super::real::ProjectionYear;

/// Maximum number of insight lines
pub const MAX_INSIGHTS: usize = 4;

/// A year index paired with its total annual cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearAmount {
    pub year: u32,
    pub amount: f64,
}

/// Headline rollup of a lifestyle projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleSummary {
    pub thirty_year_total: f64,
    pub peak_year: YearAmount,
    pub lowest_year: YearAmount,

    /// Household income minus year-0 expenses; negative means a shortfall
    pub income_gap: f64,

    pub insights: Vec<String>,
}

/// Summarize a projection; ties on peak and lowest go to the earliest year
pub fn summarize(
    projection: &[ProjectionYear],
    profile: &HouseholdProfile,
    costs: &LifestyleCosts,
) -> LifestyleSummary {
    let thirty_year_total: f64 = projection.iter().map(|p| p.total_annual).sum();

    let mut peak = YearAmount { year: 0, amount: 0.0 };
    let mut lowest = YearAmount {
        year: 0,
        amount: f64::INFINITY,
    };
    for year in projection {
        if year.total_annual > peak.amount {
            peak = YearAmount {
                year: year.year,
                amount: year.total_annual,
            };
        }
        if year.total_annual < lowest.amount {
            lowest = YearAmount {
                year: year.year,
                amount: year.total_annual,
            };
        }
    }
    if projection.is_empty() {
        lowest.amount = 0.0;
    }

    let first_year_total = projection.first().map_or(0.0, |p| p.total_annual);

    LifestyleSummary {
        thirty_year_total,
        peak_year: peak,
        lowest_year: lowest,
        income_gap: profile.household_income() - first_year_total,
        insights: insights(projection, profile, costs),
    }
}

/// Up to [`MAX_INSIGHTS`] observations; an empty list when nothing stands out
fn insights(
    projection: &[ProjectionYear],
    profile: &HouseholdProfile,
    costs: &LifestyleCosts,
) -> Vec<String> {
    let mut out = Vec::new();
    let income = profile.household_income();

    // Stretches where spending clearly outruns income
    let tight_years: Vec<u32> = projection
        .iter()
        .filter(|p| p.total_annual > income * 1.1)
        .map(|p| p.year + 1)
        .collect();
    if !tight_years.is_empty() {
        let range = if tight_years.len() > 2 {
            format!(
                "Years {}-{}",
                tight_years[0],
                tight_years[tight_years.len() - 1]
            )
        } else {
            format!(
                "Year {}",
                tight_years
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(" and ")
            )
        };
        out.push(format!(
            "{range} will be your tightest period - expenses exceed income."
        ));
    }

    // Peak simultaneous enrollment
    let max_in_school = projection
        .iter()
        .map(|p| {
            profile
                .children
                .iter()
                .filter(|c| {
                    let age = c.age_in_year(profile.current_year, p.year);
                    (2..=17).contains(&age)
                })
                .count()
        })
        .max()
        .unwrap_or(0);
    if max_in_school >= 3 {
        out.push(format!(
            "You'll have {max_in_school} children in school simultaneously at peak."
        ));
    }

    // Wedding rollups by gender
    let girls = profile
        .children
        .iter()
        .filter(|c| c.gender == Gender::Girl)
        .count();
    let boys = profile
        .children
        .iter()
        .filter(|c| c.gender == Gender::Boy)
        .count();

    if girls > 0 {
        let total = girls as f64 * costs.simchas.wedding_girl(profile.simcha_style);
        out.push(format!(
            "Wedding costs for {girls} daughter{}: ~${}K total.",
            if girls > 1 { "s" } else { "" },
            (total / 1_000.0).round()
        ));
    }
    if boys > 0 && girls > 0 {
        let total = boys as f64 * costs.simchas.wedding_boy(profile.simcha_style);
        out.push(format!(
            "Engagement costs for {boys} son{}: ~${}K total.",
            if boys > 1 { "s" } else { "" },
            (total / 1_000.0).round()
        ));
    }

    // When the last child finishes high school
    let last_graduation = profile
        .children
        .iter()
        .map(|c| 18 - (profile.current_year - c.birth_year))
        .max()
        .unwrap_or(0);
    if last_graduation > 0 && (last_graduation as usize) < projection.len() {
        out.push(format!(
            "After Year {last_graduation}, education costs drop as kids graduate."
        ));
    }

    out.truncate(MAX_INSIGHTS);
    out
}
