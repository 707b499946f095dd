//! Alert-level classification thresholds.
//!
//! The per-profile floors and ceilings here are the most important tunable
//! surface in the system: display panels, alerting, and the advisory rules
//! all key off them. Bump [`THRESHOLDS_VERSION`] whenever a value changes so
//! downstream consumers can detect a table revision.

use crate::profile::Profile;
use serde::{Deserialize, Serialize};

/// Revision counter for the threshold tables below.
pub const THRESHOLDS_VERSION: u32 = 1;

/// A metric the analyzer tracks across readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    PrimaryGas,
    Power,
    Stability,
}

impl Metric {
    /// Fixed iteration order for deterministic analyzer output.
    pub const TRACKED: [Metric; 4] = [
        Metric::Temperature,
        Metric::PrimaryGas,
        Metric::Power,
        Metric::Stability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::PrimaryGas => "primary_gas",
            Metric::Power => "power",
            Metric::Stability => "stability",
        }
    }
}

/// Severity of a predicted metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Safe,
    Warning,
    Critical,
}

/// Threshold constants, shared by classification, stability scoring, and
/// the alert rules.
pub mod limits {
    /// Temperature bands (°C), both profiles.
    pub const TEMP_CRITICAL_LOW: f64 = 16.0;
    pub const TEMP_CRITICAL_HIGH: f64 = 30.0;
    pub const TEMP_WARNING_LOW: f64 = 18.0;
    pub const TEMP_WARNING_HIGH: f64 = 26.0;

    /// Habitat O2 concentration floors (percent).
    pub const HABITAT_GAS_CRITICAL: f64 = 19.5;
    pub const HABITAT_GAS_WARNING: f64 = 20.0;

    /// Facility air-quality index floors (higher is better).
    pub const FACILITY_GAS_CRITICAL: f64 = 60.0;
    pub const FACILITY_GAS_WARNING: f64 = 70.0;

    /// Power reserve floors (percent).
    pub const POWER_CRITICAL: f64 = 30.0;
    pub const POWER_WARNING: f64 = 50.0;

    /// Stability score floors.
    pub const STABILITY_CRITICAL: f64 = 40.0;
    pub const STABILITY_WARNING: f64 = 60.0;
}

/// Primary-gas floor below which the level is critical for this profile.
pub fn gas_critical_floor(profile: Profile) -> f64 {
    match profile {
        Profile::Habitat => limits::HABITAT_GAS_CRITICAL,
        Profile::Facility => limits::FACILITY_GAS_CRITICAL,
    }
}

/// Classify a (typically predicted) metric value against the profile's table.
pub fn classify_alert_level(profile: Profile, metric: Metric, value: f64) -> AlertLevel {
    use limits::*;

    match metric {
        Metric::Temperature => {
            if value < TEMP_CRITICAL_LOW || value > TEMP_CRITICAL_HIGH {
                AlertLevel::Critical
            } else if value < TEMP_WARNING_LOW || value > TEMP_WARNING_HIGH {
                AlertLevel::Warning
            } else {
                AlertLevel::Safe
            }
        }
        Metric::PrimaryGas => {
            let (critical, warning) = match profile {
                Profile::Habitat => (HABITAT_GAS_CRITICAL, HABITAT_GAS_WARNING),
                Profile::Facility => (FACILITY_GAS_CRITICAL, FACILITY_GAS_WARNING),
            };
            if value < critical {
                AlertLevel::Critical
            } else if value < warning {
                AlertLevel::Warning
            } else {
                AlertLevel::Safe
            }
        }
        Metric::Power => {
            if value < POWER_CRITICAL {
                AlertLevel::Critical
            } else if value < POWER_WARNING {
                AlertLevel::Warning
            } else {
                AlertLevel::Safe
            }
        }
        Metric::Stability => {
            if value < STABILITY_CRITICAL {
                AlertLevel::Critical
            } else if value < STABILITY_WARNING {
                AlertLevel::Warning
            } else {
                AlertLevel::Safe
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_levels() {
        let classify = |v| classify_alert_level(Profile::Habitat, Metric::Temperature, v);
        assert_eq!(classify(21.0), AlertLevel::Safe);
        assert_eq!(classify(17.0), AlertLevel::Warning);
        assert_eq!(classify(27.5), AlertLevel::Warning);
        assert_eq!(classify(15.0), AlertLevel::Critical);
        assert_eq!(classify(31.0), AlertLevel::Critical);
    }

    #[test]
    fn test_primary_gas_levels_per_profile() {
        assert_eq!(
            classify_alert_level(Profile::Habitat, Metric::PrimaryGas, 19.0),
            AlertLevel::Critical
        );
        assert_eq!(
            classify_alert_level(Profile::Habitat, Metric::PrimaryGas, 19.8),
            AlertLevel::Warning
        );
        assert_eq!(
            classify_alert_level(Profile::Habitat, Metric::PrimaryGas, 21.0),
            AlertLevel::Safe
        );
        // Same value means something very different on the facility index.
        assert_eq!(
            classify_alert_level(Profile::Facility, Metric::PrimaryGas, 21.0),
            AlertLevel::Critical
        );
        assert_eq!(
            classify_alert_level(Profile::Facility, Metric::PrimaryGas, 65.0),
            AlertLevel::Warning
        );
        assert_eq!(
            classify_alert_level(Profile::Facility, Metric::PrimaryGas, 85.0),
            AlertLevel::Safe
        );
    }

    #[test]
    fn test_power_and_stability_levels() {
        assert_eq!(
            classify_alert_level(Profile::Habitat, Metric::Power, 25.0),
            AlertLevel::Critical
        );
        assert_eq!(
            classify_alert_level(Profile::Habitat, Metric::Power, 45.0),
            AlertLevel::Warning
        );
        assert_eq!(
            classify_alert_level(Profile::Facility, Metric::Power, 75.0),
            AlertLevel::Safe
        );
        assert_eq!(
            classify_alert_level(Profile::Habitat, Metric::Stability, 35.0),
            AlertLevel::Critical
        );
        assert_eq!(
            classify_alert_level(Profile::Habitat, Metric::Stability, 55.0),
            AlertLevel::Warning
        );
        assert_eq!(
            classify_alert_level(Profile::Habitat, Metric::Stability, 90.0),
            AlertLevel::Safe
        );
    }

    #[test]
    fn test_tracked_order_is_fixed() {
        assert_eq!(
            Metric::TRACKED,
            [
                Metric::Temperature,
                Metric::PrimaryGas,
                Metric::Power,
                Metric::Stability
            ]
        );
    }
}
