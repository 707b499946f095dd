//! Rule-cascade operational advisories.
//!
//! Given a reading and its raised alerts, pick the most pressing compound
//! condition and return concrete recommendations for it. First matching
//! rule wins; no alerts means no advisory.

use crate::alerts::{Alert, AlertSeverity, ReadingSnapshot};
use crate::profile::Profile;
use crate::thresholds;
use serde::{Deserialize, Serialize};

/// An operator-facing advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub condition: String,
    pub recommendations: Vec<&'static str>,
    pub explanation: &'static str,
}

/// Evaluate the advisory cascade. Returns `None` when nothing is alerting.
pub fn generate_advisory(snapshot: &ReadingSnapshot, alerts: &[Alert]) -> Option<Advisory> {
    if alerts.is_empty() {
        return None;
    }

    let gas_low = snapshot.primary_gas < thresholds::gas_critical_floor(snapshot.profile);
    let power = snapshot.power;
    let power_below = |floor: f64| power.map_or(false, |p| p < floor);
    let power_above = |floor: f64| power.map_or(false, |p| p > floor);

    if gas_low && power_below(50.0) {
        return Some(match snapshot.profile {
            Profile::Habitat => Advisory {
                condition: "Oxygen depletion with insufficient power reserves".to_string(),
                recommendations: vec![
                    "Reduce non-critical operations immediately",
                    "Prioritize life-support systems",
                    "Dim lighting and reduce HVAC load",
                    "Activate emergency oxygen reserves",
                ],
                explanation: "Current oxygen levels cannot sustain crew safety. With limited \
                    power, CO2 scrubbers may fail. Immediate intervention required to prevent \
                    life-threatening conditions.",
            },
            Profile::Facility => Advisory {
                condition: "Air quality degradation with insufficient power reserves".to_string(),
                recommendations: vec![
                    "Reduce non-critical operations immediately",
                    "Prioritize ventilation systems",
                    "Dim lighting and reduce HVAC load",
                    "Activate emergency filtration reserves",
                ],
                explanation: "Poor air quality combined with low power threatens ventilation \
                    systems. Without action, indoor air could become hazardous within hours.",
            },
        });
    }

    if snapshot.temperature > 30.0 && power_above(60.0) {
        return Some(Advisory {
            condition: "Thermal regulation failure with available power".to_string(),
            recommendations: vec![
                "Activate enhanced cooling systems",
                "Close solar-facing vents",
                "Pause heat-intensive equipment",
                "Redirect power to thermal management",
            ],
            explanation: "Elevated temperatures stress both equipment and crew. With sufficient \
                power available, aggressive cooling measures can prevent cascade failures.",
        });
    }

    if power_below(30.0) {
        return Some(Advisory {
            condition: "Critical power deficit".to_string(),
            recommendations: vec![
                "Switch to emergency low-power mode",
                "Defer all non-essential operations",
                "Prepare for potential system hibernation",
                "Monitor power generation recovery status",
            ],
            explanation: "Power reserves approaching minimum safe levels. All systems must enter \
                conservation mode to maintain critical operation until generation recovers.",
        });
    }

    if alerts
        .iter()
        .any(|a| a.severity == AlertSeverity::Critical)
    {
        return Some(Advisory {
            condition: "Multiple critical systems compromised".to_string(),
            recommendations: vec![
                "Activate emergency protocols",
                "Prioritize life-support systems",
                "Prepare for potential evacuation",
                "Contact ground support",
            ],
            explanation: "Multiple simultaneous failures indicate systemic instability. \
                Immediate coordinated response required across all systems.",
        });
    }

    Some(Advisory {
        condition: "Minor stability degradation".to_string(),
        recommendations: vec![
            "Monitor trending parameters closely",
            "Perform preventive maintenance checks",
            "Review recent operational changes",
        ],
        explanation: "Current conditions are suboptimal but manageable. Proactive monitoring \
            and minor adjustments should prevent escalation.",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::detect_alerts;

    fn snapshot(profile: Profile) -> ReadingSnapshot {
        ReadingSnapshot {
            profile,
            temperature: 21.0,
            primary_gas: 21.0,
            power: Some(75.0),
            humidity: 30.0,
            pressure: 610.0,
            stability: 95.0,
        }
    }

    #[test]
    fn test_no_alerts_means_no_advisory() {
        let snapshot = snapshot(Profile::Habitat);
        assert_eq!(generate_advisory(&snapshot, &[]), None);
    }

    #[test]
    fn test_oxygen_and_power_compound_rule() {
        let mut snapshot = snapshot(Profile::Habitat);
        snapshot.primary_gas = 18.5;
        snapshot.power = Some(45.0);
        let alerts = detect_alerts(&snapshot);
        let advisory = generate_advisory(&snapshot, &alerts).unwrap();
        assert!(advisory.condition.contains("Oxygen depletion"));
    }

    #[test]
    fn test_power_deficit_rule() {
        let mut snapshot = snapshot(Profile::Habitat);
        snapshot.power = Some(25.0);
        let alerts = detect_alerts(&snapshot);
        let advisory = generate_advisory(&snapshot, &alerts).unwrap();
        assert_eq!(advisory.condition, "Critical power deficit");
    }

    #[test]
    fn test_thermal_rule_needs_spare_power() {
        let mut snapshot = snapshot(Profile::Habitat);
        snapshot.temperature = 32.0;
        let alerts = detect_alerts(&snapshot);
        let advisory = generate_advisory(&snapshot, &alerts).unwrap();
        assert!(advisory.condition.contains("Thermal regulation"));
    }

    #[test]
    fn test_fallback_advisory_for_minor_warnings() {
        let mut snapshot = snapshot(Profile::Habitat);
        snapshot.stability = 55.0;
        let alerts = detect_alerts(&snapshot);
        let advisory = generate_advisory(&snapshot, &alerts).unwrap();
        assert_eq!(advisory.condition, "Minor stability degradation");
    }
}
