//! Typed input profiles for both projection engines

mod financial;
mod household;
pub mod loader;

pub use financial::{
    AccountElection, FinancialProfile, Jurisdiction, PretaxElection, SpendingElection,
};
pub use household::{
    current_calendar_year, Child, Gender, GroceryStyle, HelpLevel, HousingChoice,
    HousingSituation, HouseholdProfile, IncomeRange, PesachStyle, PrimaryHousingPlan,
    QuickChild, QuickProfile, SchoolChoice, SeasonalHousingPlan, SimchaStyle, Vehicle,
    VehicleType,
};
pub use loader::ProfileError;
