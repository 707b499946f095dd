//! Per-profile simulation constants.
//!
//! One immutable config per simulator instance. Baselines are where each
//! variable sits when the trend walk is centered; the bands bound what the
//! generator is allowed to emit.

use habsim_logic::profile::Profile;
use serde::{Deserialize, Serialize};

/// Immutable baselines and physical bands for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Baseline temperature, °C.
    pub base_temperature: f64,
    /// Baseline primary gas: O2 % (habitat) or air-quality index (facility).
    pub base_primary_gas: f64,
    /// Baseline power reserve, percent.
    pub base_power: f64,
    /// Baseline relative humidity, percent.
    pub base_humidity: f64,
    /// Baseline pressure: Pa-equivalent (habitat) or hPa (facility).
    pub base_pressure: f64,
    /// Upper clamp for the primary gas reading.
    pub gas_ceiling: f64,
    /// Upper clamp for pressure.
    pub pressure_ceiling: f64,
    /// Half-width of the uniform pressure noise.
    pub pressure_jitter: f64,
}

impl ProfileConfig {
    /// Canonical constants for a profile.
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Habitat => Self {
                base_temperature: 20.0,
                base_primary_gas: 21.0,
                base_power: 75.0,
                base_humidity: 30.0,
                base_pressure: 610.0,
                gas_ceiling: 25.0,
                pressure_ceiling: 700.0,
                pressure_jitter: 10.0,
            },
            Profile::Facility => Self {
                base_temperature: 22.0,
                base_primary_gas: 85.0,
                base_power: 70.0,
                base_humidity: 55.0,
                base_pressure: 1013.0,
                gas_ceiling: 100.0,
                pressure_ceiling: 1100.0,
                pressure_jitter: 5.0,
            },
        }
    }
}
