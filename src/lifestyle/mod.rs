//! Lifestyle cost projection
//!
//! Two strategies over the same benchmark cost tables: an event-triggered
//! 30-year projection from a full household profile, and an amortized
//! single-point estimate from a handful of tier choices.

mod costs;
mod events;
mod quick;
mod real;
mod summary;

pub use costs::{
    EducationFees, ExtrasCosts, FoodCosts, HelpCosts, HousingCosts, LifestyleCosts, SimchaCosts,
    TransportCosts, TuitionTable,
};
pub use events::{events_for_year, LifeEvent, LifeEventKind};
pub use quick::{QuickCategoryCosts, QuickEstimate, QuickEstimator};
pub use real::{CategoryCosts, LifestyleEngine, ProjectionYear, HORIZON_YEARS};
pub use summary::{summarize, LifestyleSummary, YearAmount, MAX_INSIGHTS};
