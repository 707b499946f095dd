//! Threshold alerts derived from a single reading.
//!
//! Pure rules: the caller hands in the reading's fields, the rules hand
//! back zero or more alerts. Habitat rules watch the life-support floors;
//! facility rules are weather-shaped (freezing, heat, storm pressure).

use crate::profile::Profile;
use crate::thresholds::limits;
use serde::{Deserialize, Serialize};

/// Severity of a raised alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// One raised alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub title: &'static str,
    pub message: String,
}

/// The reading fields the alert and advisory rules consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingSnapshot {
    pub profile: Profile,
    pub temperature: f64,
    pub primary_gas: f64,
    pub power: Option<f64>,
    pub humidity: f64,
    pub pressure: f64,
    pub stability: f64,
}

/// Evaluate all alert rules against one reading.
pub fn detect_alerts(snapshot: &ReadingSnapshot) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if snapshot.stability < limits::STABILITY_CRITICAL {
        alerts.push(Alert {
            severity: AlertSeverity::Critical,
            title: "Critical Stability",
            message: "Environment stability severely compromised".to_string(),
        });
    } else if snapshot.stability < limits::STABILITY_WARNING {
        alerts.push(Alert {
            severity: AlertSeverity::Warning,
            title: "Stability Warning",
            message: "Stability degrading".to_string(),
        });
    }

    match snapshot.profile {
        Profile::Habitat => {
            if snapshot.primary_gas < limits::HABITAT_GAS_CRITICAL {
                alerts.push(Alert {
                    severity: AlertSeverity::Critical,
                    title: "Oxygen Critical",
                    message: "Oxygen levels below safe threshold".to_string(),
                });
            }
            if snapshot.temperature > limits::TEMP_CRITICAL_HIGH {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    title: "Temperature High",
                    message: "Temperature rising above optimal range".to_string(),
                });
            } else if snapshot.temperature < limits::TEMP_CRITICAL_LOW {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    title: "Temperature Low",
                    message: "Temperature dropping below optimal range".to_string(),
                });
            }
        }
        Profile::Facility => {
            if snapshot.primary_gas < limits::FACILITY_GAS_CRITICAL {
                alerts.push(Alert {
                    severity: AlertSeverity::Critical,
                    title: "Air Quality Critical",
                    message: "Air quality dangerously low".to_string(),
                });
            }
            if snapshot.temperature < 0.0 {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    title: "Freezing Temperature",
                    message: format!("Temperature dropped to {:.1}°C", snapshot.temperature),
                });
            } else if snapshot.temperature > 35.0 {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    title: "Extreme Heat",
                    message: format!("Temperature reached {:.1}°C", snapshot.temperature),
                });
            }
            if snapshot.humidity > 85.0 {
                alerts.push(Alert {
                    severity: AlertSeverity::Info,
                    title: "High Humidity",
                    message: format!("Humidity at {:.0}% - rain likely", snapshot.humidity),
                });
            }
            if snapshot.pressure < 980.0 {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    title: "Low Pressure System",
                    message: "Storm conditions possible".to_string(),
                });
            }
        }
    }

    if let Some(power) = snapshot.power {
        if power < limits::POWER_CRITICAL {
            alerts.push(Alert {
                severity: AlertSeverity::Critical,
                title: "Power Critical",
                message: "Power reserves critically low".to_string(),
            });
        } else if power < limits::POWER_WARNING {
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                title: "Power Warning",
                message: "Power reserves declining".to_string(),
            });
        }
    }

    alerts
}
