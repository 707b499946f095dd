//! Z-score anomaly detection.
//!
//! A value is anomalous when it deviates from the recent mean by more than
//! two standard deviations. Too little history or a flat series is treated
//! as not-anomalous: absence of evidence is insufficient data, not an
//! anomaly.

use crate::profile::Profile;
use crate::stats::{mean, population_std_dev};
use crate::thresholds::{self, Metric};
use serde::{Deserialize, Serialize};

/// Z-score above which a value counts as anomalous.
pub const Z_SCORE_THRESHOLD: f64 = 2.0;

/// Fewest historical samples required before the test is meaningful.
pub const MIN_HISTORY: usize = 5;

/// Temperature reference and large-deviation threshold for severity grading.
const TEMP_REFERENCE: f64 = 20.0;
const TEMP_LARGE_DEVIATION: f64 = 10.0;

/// Power floor below which an anomaly is graded high.
const POWER_LOW_FLOOR: f64 = 40.0;

/// How far outside expectation an anomalous value sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Z-score test of `current` against `historical` samples.
pub fn is_anomalous(current: f64, historical: &[f64]) -> bool {
    if historical.len() < MIN_HISTORY {
        return false;
    }
    let std_dev = population_std_dev(historical);
    if std_dev == 0.0 {
        // Flat history: no spread to measure against, and no division by zero.
        return false;
    }
    let z = ((current - mean(historical)) / std_dev).abs();
    z > Z_SCORE_THRESHOLD
}

/// Grade an already-detected anomaly by how far the value sits from the
/// profile-appropriate reference point.
pub fn anomaly_severity(profile: Profile, metric: Metric, current: f64) -> Severity {
    let high = match metric {
        Metric::Temperature => (current - TEMP_REFERENCE).abs() > TEMP_LARGE_DEVIATION,
        Metric::PrimaryGas => current < thresholds::gas_critical_floor(profile),
        Metric::Power => current < POWER_LOW_FLOOR,
        Metric::Stability => current < thresholds::limits::STABILITY_CRITICAL,
    };
    if high {
        Severity::High
    } else {
        Severity::Medium
    }
}
