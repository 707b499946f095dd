//! Streaming analysis over the history buffer.
//!
//! Pure function of its inputs: the caller hands in the buffer and the
//! latest reading, and gets per-metric forecasts plus anomaly flags back.
//! No state survives between calls, so concurrent callers are fine and
//! identical inputs always produce identical reports.

use crate::history::{metric_value, HistoryBuffer, MIN_ANALYSIS_LEN};
use crate::reading::Reading;
use chrono::{DateTime, Utc};
use habsim_logic::anomaly::{self, Severity};
use habsim_logic::profile::Profile;
use habsim_logic::stats::{self, Trend};
use habsim_logic::thresholds::{classify_alert_level, AlertLevel, Metric};
use serde::{Deserialize, Serialize};

/// A short-horizon forecast for one tracked metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub metric: Metric,
    pub current: f64,
    pub predicted: f64,
    pub confidence: f64,
    pub trend: Trend,
    pub alert_level: AlertLevel,
}

/// A flagged deviation from recent history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyFlag {
    pub metric: Metric,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Everything one analysis pass produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub predictions: Vec<Prediction>,
    pub anomalies: Vec<AnomalyFlag>,
}

/// Metrics that get an anomaly pass. Stability is derived from the others,
/// so it gets a prediction row but no z-score check of its own.
const ANOMALY_METRICS: [Metric; 3] = [Metric::Temperature, Metric::PrimaryGas, Metric::Power];

/// Analyze the buffered history against the current reading.
///
/// Fewer than [`MIN_ANALYSIS_LEN`] buffered readings degrades to an empty
/// report; a metric with no samples (or absent from the current reading)
/// is skipped rather than predicted from nothing.
pub fn analyze(history: &HistoryBuffer, current: &Reading) -> AnalysisReport {
    let mut report = AnalysisReport::default();
    if history.len() < MIN_ANALYSIS_LEN {
        return report;
    }

    let profile = current.profile();

    for metric in Metric::TRACKED {
        let current_value = match metric_value(current, metric) {
            Some(v) => v,
            None => continue,
        };
        let series = history.metric_series(metric);
        if series.is_empty() {
            continue;
        }

        let forecast = stats::predict(&series);
        report.predictions.push(Prediction {
            metric,
            current: current_value,
            predicted: forecast.predicted,
            confidence: forecast.confidence,
            trend: stats::classify_trend(&series),
            alert_level: classify_alert_level(profile, metric, forecast.predicted),
        });
    }

    for metric in ANOMALY_METRICS {
        let current_value = match metric_value(current, metric) {
            Some(v) => v,
            None => continue,
        };
        let series = history.metric_series(metric);
        if !anomaly::is_anomalous(current_value, &series) {
            continue;
        }
        report.anomalies.push(AnomalyFlag {
            metric,
            severity: anomaly::anomaly_severity(profile, metric, current_value),
            message: anomaly_message(profile, metric, current_value),
            timestamp: current.timestamp(),
        });
    }

    report
}

fn anomaly_message(profile: Profile, metric: Metric, value: f64) -> String {
    match metric {
        Metric::Temperature => format!("Unusual temperature pattern detected: {value:.1}°C"),
        Metric::PrimaryGas => match profile {
            Profile::Habitat => format!("Anomalous oxygen levels detected: {value:.1}%"),
            Profile::Facility => format!("Anomalous air quality reading: {value:.1}"),
        },
        Metric::Power => format!("Unexpected power fluctuation: {value:.1}%"),
        Metric::Stability => format!("Unusual stability swing: {value:.1}"),
    }
}
