//! Stability scoring.
//!
//! A derived 0–100 health scalar: start from 100 and subtract weighted
//! penalties for each variable outside its profile's optimal band. The
//! habitat oxygen floor is the steepest penalty because it is the
//! life-critical one.

use crate::profile::Profile;

/// Score a reading's core variables.
///
/// `power` is optional because facility readings may not carry a power
/// figure; absent power contributes no penalty.
pub fn stability_score(
    profile: Profile,
    temperature: f64,
    primary_gas: f64,
    power: Option<f64>,
) -> f64 {
    let mut score = 100.0;

    match profile {
        Profile::Habitat => {
            // Optimal band 18–24 °C, centered on 21.
            if !(18.0..=24.0).contains(&temperature) {
                score -= (temperature - 21.0).abs() * 3.0;
            }
            // O2 deficit below 19.5% is the dominant penalty; excess above
            // 23% is a (fire-risk) penalty too.
            if primary_gas < 19.5 {
                score -= (19.5 - primary_gas) * 8.0;
            }
            if primary_gas > 23.0 {
                score -= (primary_gas - 23.0) * 5.0;
            }
        }
        Profile::Facility => {
            // Optimal band 18–26 °C, centered on 22.
            if !(18.0..=26.0).contains(&temperature) {
                score -= (temperature - 22.0).abs() * 2.5;
            }
            if primary_gas < 70.0 {
                score -= (70.0 - primary_gas) * 1.5;
            }
        }
    }

    if let Some(power) = power {
        if power < 40.0 {
            score -= (40.0 - power) * 3.0;
        }
        if power < 20.0 {
            score -= 20.0;
        }
    }

    score.clamp(0.0, 100.0)
}
