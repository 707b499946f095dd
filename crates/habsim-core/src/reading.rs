//! Reading value objects.
//!
//! A reading is immutable once produced. The two profiles carry different
//! trace fields (radiation dose rate vs. CO2 ppm), so the type is a tagged
//! variant with accessors for the shared subset rather than one struct of
//! always-optional fields. The crisis tag doubles as the crisis flag:
//! `is_crisis()` is true exactly when a kind is present.

use chrono::{DateTime, Utc};
use habsim_logic::profile::Profile;
use serde::{Deserialize, Serialize};

/// Which variable an active crisis episode perturbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisKind {
    GasDepletion,
    PowerFailure,
    ThermalSpike,
}

impl CrisisKind {
    pub fn label(self) -> &'static str {
        match self {
            CrisisKind::GasDepletion => "gas depletion",
            CrisisKind::PowerFailure => "power failure",
            CrisisKind::ThermalSpike => "thermal spike",
        }
    }
}

/// One habitat reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitatReading {
    pub timestamp: DateTime<Utc>,
    /// °C.
    pub temperature: f64,
    /// O2 concentration, percent.
    pub primary_gas: f64,
    /// Power reserve, percent.
    pub power: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    pub pressure: f64,
    /// Radiation dose rate, mSv/h.
    pub radiation: f64,
    /// Derived health scalar in [0, 100].
    pub stability_score: f64,
    pub crisis: Option<CrisisKind>,
}

/// One facility reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityReading {
    pub timestamp: DateTime<Utc>,
    /// °C.
    pub temperature: f64,
    /// Air-quality index, higher is better.
    pub primary_gas: f64,
    /// Power reserve, percent; absent when the source has no power telemetry.
    pub power: Option<f64>,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// hPa.
    pub pressure: f64,
    /// CO2 concentration, ppm.
    pub co2_ppm: f64,
    /// Derived health scalar in [0, 100].
    pub stability_score: f64,
    pub crisis: Option<CrisisKind>,
}

/// A reading from either profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "lowercase")]
pub enum Reading {
    Habitat(HabitatReading),
    Facility(FacilityReading),
}

impl Reading {
    pub fn profile(&self) -> Profile {
        match self {
            Reading::Habitat(_) => Profile::Habitat,
            Reading::Facility(_) => Profile::Facility,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Reading::Habitat(r) => r.timestamp,
            Reading::Facility(r) => r.timestamp,
        }
    }

    pub fn temperature(&self) -> f64 {
        match self {
            Reading::Habitat(r) => r.temperature,
            Reading::Facility(r) => r.temperature,
        }
    }

    pub fn primary_gas(&self) -> f64 {
        match self {
            Reading::Habitat(r) => r.primary_gas,
            Reading::Facility(r) => r.primary_gas,
        }
    }

    /// Power reserve; habitat readings always carry one.
    pub fn power(&self) -> Option<f64> {
        match self {
            Reading::Habitat(r) => Some(r.power),
            Reading::Facility(r) => r.power,
        }
    }

    pub fn humidity(&self) -> f64 {
        match self {
            Reading::Habitat(r) => r.humidity,
            Reading::Facility(r) => r.humidity,
        }
    }

    pub fn pressure(&self) -> f64 {
        match self {
            Reading::Habitat(r) => r.pressure,
            Reading::Facility(r) => r.pressure,
        }
    }

    pub fn stability_score(&self) -> f64 {
        match self {
            Reading::Habitat(r) => r.stability_score,
            Reading::Facility(r) => r.stability_score,
        }
    }

    pub fn crisis_kind(&self) -> Option<CrisisKind> {
        match self {
            Reading::Habitat(r) => r.crisis,
            Reading::Facility(r) => r.crisis,
        }
    }

    pub fn is_crisis(&self) -> bool {
        self.crisis_kind().is_some()
    }
}
