//! JSON profile persistence
//!
//! The collaborator-facing load/save boundary. Loads are atomic
//! read-then-deserialize; the core never sees partial state.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use super::{FinancialProfile, HouseholdProfile};

/// Errors from the profile load/save boundary
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn load<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<T, ProfileError> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    info!("loaded {} profile from {}", kind, path.display());
    Ok(value)
}

fn save<T: Serialize>(value: &T, path: &Path, kind: &str) -> Result<(), ProfileError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    info!("saved {} profile to {}", kind, path.display());
    Ok(())
}

/// Load a retirement-engine profile from JSON
pub fn load_financial_profile(path: &Path) -> Result<FinancialProfile, ProfileError> {
    load(path, "financial")
}

/// Load a lifestyle-engine profile from JSON
pub fn load_household_profile(path: &Path) -> Result<HouseholdProfile, ProfileError> {
    load(path, "household")
}

/// Save a retirement-engine profile as pretty-printed JSON
pub fn save_financial_profile(
    profile: &FinancialProfile,
    path: &Path,
) -> Result<(), ProfileError> {
    save(profile, path, "financial")
}

/// Save a lifestyle-engine profile as pretty-printed JSON
pub fn save_household_profile(
    profile: &HouseholdProfile,
    path: &Path,
) -> Result<(), ProfileError> {
    save(profile, path, "household")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_profile_round_trip() {
        let path = std::env::temp_dir().join("fincast_test_financial_profile.json");
        let profile = FinancialProfile::default();

        save_financial_profile(&profile, &path).unwrap();
        let loaded = load_financial_profile(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.gross_income, profile.gross_income);
        assert_eq!(loaded.jurisdiction, profile.jurisdiction);
        assert_eq!(
            loaded.pretax_401k.annual_contribution,
            profile.pretax_401k.annual_contribution
        );
    }

    #[test]
    fn test_household_profile_round_trip() {
        let path = std::env::temp_dir().join("fincast_test_household_profile.json");
        let profile = HouseholdProfile::default();

        save_household_profile(&profile, &path).unwrap();
        let loaded = load_household_profile(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.current_year, profile.current_year);
        assert_eq!(loaded.tzedakah_pct, profile.tzedakah_pct);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_financial_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }
}
