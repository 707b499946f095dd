//! Operating profiles.
//!
//! A profile selects which physical baselines and threshold tables apply:
//! a sealed habitat (life-critical oxygen, battery-backed power) or an
//! open-air facility (air-quality index, grid power).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating context for simulation and analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Sealed habitat; primary gas is O2 concentration in percent.
    Habitat,
    /// Open-air facility; primary gas is an air-quality index (higher is better).
    Facility,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Habitat => "habitat",
            Profile::Facility => "facility",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A profile string outside the recognized set.
///
/// Parsing is the only place an unknown profile can enter the system; the
/// typed API rejects it here instead of silently keeping stale state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidProfile(pub String);

impl fmt::Display for InvalidProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown profile '{}', expected 'habitat' or 'facility'",
            self.0
        )
    }
}

impl std::error::Error for InvalidProfile {}

impl FromStr for Profile {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "habitat" => Ok(Profile::Habitat),
            "facility" => Ok(Profile::Facility),
            other => Err(InvalidProfile(other.to_string())),
        }
    }
}
