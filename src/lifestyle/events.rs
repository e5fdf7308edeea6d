//! Life-event timeline
//!
//! Derives the notable events of each simulated year from the household
//! profile. Events are descriptive output only; the cost functions key off
//! ages and years directly.

use serde::{Deserialize, Serialize};

use crate::profile::{Gender, HouseholdProfile, HousingSituation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeEventKind {
    Birth,
    SchoolStart,
    BarMitzvah,
    HighSchool,
    Graduation,
    Wedding,
    HousePurchase,
}

/// One event attached to a projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub kind: LifeEventKind,

    /// Child the event belongs to, if any
    pub child: Option<String>,

    pub description: String,
}

impl LifeEvent {
    fn for_child(kind: LifeEventKind, name: &str, description: String) -> Self {
        Self {
            kind,
            child: Some(name.to_string()),
            description,
        }
    }
}

/// All events occurring in simulated year `year`
///
/// The per-child milestones are tied to distinct ages, so a child produces at
/// most one event per year unless their wedding age collides with a milestone.
pub fn events_for_year(profile: &HouseholdProfile, year: u32) -> Vec<LifeEvent> {
    let mut events = Vec::new();

    for child in &profile.children {
        let age = child.age_in_year(profile.current_year, year);
        let name = child.name.as_str();

        if age == 0 && child.birth_year > profile.current_year {
            events.push(LifeEvent::for_child(
                LifeEventKind::Birth,
                name,
                format!("{name} is born"),
            ));
        }

        if age == 2 {
            events.push(LifeEvent::for_child(
                LifeEventKind::SchoolStart,
                name,
                format!("{name} starts school"),
            ));
        }

        if age == 13 {
            let kind = match child.gender {
                Gender::Boy => "Bar",
                Gender::Girl => "Bat",
            };
            events.push(LifeEvent::for_child(
                LifeEventKind::BarMitzvah,
                name,
                format!("{name}'s {kind} Mitzvah"),
            ));
        }

        if age == 14 {
            events.push(LifeEvent::for_child(
                LifeEventKind::HighSchool,
                name,
                format!("{name} starts high school"),
            ));
        }

        if age == 18 {
            events.push(LifeEvent::for_child(
                LifeEventKind::Graduation,
                name,
                format!("{name} graduates high school"),
            ));
        }

        if age == child.expected_wedding_age {
            events.push(LifeEvent::for_child(
                LifeEventKind::Wedding,
                name,
                format!("{name}'s wedding"),
            ));
        }
    }

    let calendar_year = profile.current_year + year as i32;

    let primary = &profile.primary_housing;
    if primary.plan_to_buy
        && primary.situation == HousingSituation::Rent
        && calendar_year == primary.purchase_year
    {
        events.push(LifeEvent {
            kind: LifeEventKind::HousePurchase,
            child: None,
            description: "Purchase of primary home".to_string(),
        });
    }

    let seasonal = &profile.seasonal_housing;
    if seasonal.plan_to_buy
        && seasonal.situation == HousingSituation::Rent
        && calendar_year == seasonal.purchase_year
    {
        events.push(LifeEvent {
            kind: LifeEventKind::HousePurchase,
            child: None,
            description: "Purchase of summer home".to_string(),
        });
    }

    events
}
