//! Windowed statistics over a single metric series.
//!
//! The forecast is a deliberately simple model: mean of the recent window
//! plus a linear trend term projected a few steps ahead. Confidence is the
//! coefficient-of-variation complement, clamped to [0, 1]. Degenerate
//! statistics (empty window, zero mean, zero deviation) degrade to safe
//! defaults instead of propagating NaN.

use serde::{Deserialize, Serialize};

/// Samples considered for the forecast window.
pub const FORECAST_WINDOW: usize = 10;

/// Steps ahead the linear extrapolation projects.
pub const FORECAST_HORIZON: f64 = 3.0;

/// Samples considered for trend classification.
pub const TREND_WINDOW: usize = 5;

/// Absolute change below which a series counts as stable.
pub const TREND_DEADBAND: f64 = 1.0;

/// A short-horizon forecast for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub predicted: f64,
    /// In [0, 1]; 0 when the underlying statistic is degenerate.
    pub confidence: f64,
}

/// Direction of a metric series over its recent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// Arithmetic mean; 0.0 for an empty series.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation; 0.0 for an empty series.
pub fn population_std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let m = mean(samples);
    let variance = samples.iter().map(|s| (s - m).powi(2)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Forecast the series [`FORECAST_HORIZON`] steps ahead of its recent window.
///
/// An empty series degrades to a zero forecast with zero confidence; it is
/// not an error to ask for a forecast with too little data.
pub fn predict(samples: &[f64]) -> Forecast {
    let window = recent(samples, FORECAST_WINDOW);
    if window.is_empty() {
        return Forecast {
            predicted: 0.0,
            confidence: 0.0,
        };
    }

    let avg = mean(window);
    let std_dev = population_std_dev(window);

    let trend = if window.len() > 1 {
        (window[window.len() - 1] - window[0]) / window.len() as f64
    } else {
        0.0
    };

    let predicted = avg + trend * FORECAST_HORIZON;
    let confidence = if avg == 0.0 {
        0.0
    } else {
        let c = 1.0 - std_dev / avg;
        if c.is_finite() {
            c.clamp(0.0, 1.0)
        } else {
            0.0
        }
    };

    Forecast {
        predicted,
        confidence,
    }
}

/// Classify the direction of the last [`TREND_WINDOW`] samples.
///
/// Changes smaller than [`TREND_DEADBAND`] in magnitude count as stable,
/// as do series with fewer than two samples.
pub fn classify_trend(samples: &[f64]) -> Trend {
    if samples.len() < 2 {
        return Trend::Stable;
    }
    let window = recent(samples, TREND_WINDOW);
    let diff = window[window.len() - 1] - window[0];
    if diff.abs() < TREND_DEADBAND {
        Trend::Stable
    } else if diff > 0.0 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    }
}

fn recent(samples: &[f64], n: usize) -> &[f64] {
    &samples[samples.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_constant_series() {
        let samples = [20.0; 10];
        let forecast = predict(&samples);
        assert!((forecast.predicted - 20.0).abs() < 1e-9);
        assert!((forecast.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_uses_recent_window_only() {
        // Ancient outliers beyond the window must not move the forecast.
        let mut samples = vec![1000.0, -1000.0];
        samples.extend(std::iter::repeat(20.0).take(FORECAST_WINDOW));
        let forecast = predict(&samples);
        assert!((forecast.predicted - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_declining_series() {
        // 21.0 down to 18.0 over ten points.
        let samples: Vec<f64> = (0..10).map(|i| 21.0 - i as f64 / 3.0).collect();
        let forecast = predict(&samples);
        assert!(forecast.predicted < mean(&samples));
        assert!(forecast.confidence > 0.0);
    }

    #[test]
    fn test_predict_degenerate_inputs() {
        assert_eq!(
            predict(&[]),
            Forecast {
                predicted: 0.0,
                confidence: 0.0
            }
        );
        // Zero mean must give confidence 0, not NaN or infinity.
        let forecast = predict(&[-1.0, 1.0, -1.0, 1.0, 0.0]);
        assert_eq!(mean(&[-1.0, 1.0, -1.0, 1.0, 0.0]), 0.0);
        assert_eq!(forecast.confidence, 0.0);
    }

    #[test]
    fn test_predict_single_sample() {
        let forecast = predict(&[42.0]);
        assert!((forecast.predicted - 42.0).abs() < 1e-9);
        assert!((forecast.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_trend_directions() {
        assert_eq!(
            classify_trend(&[10.0, 11.0, 12.0, 13.0, 14.0]),
            Trend::Increasing
        );
        assert_eq!(
            classify_trend(&[14.0, 13.0, 12.0, 11.0, 10.0]),
            Trend::Decreasing
        );
        assert_eq!(
            classify_trend(&[10.0, 10.5, 10.0, 10.4, 10.1]),
            Trend::Stable
        );
    }

    #[test]
    fn test_classify_trend_short_series() {
        assert_eq!(classify_trend(&[]), Trend::Stable);
        assert_eq!(classify_trend(&[5.0]), Trend::Stable);
    }

    #[test]
    fn test_classify_trend_ignores_old_samples() {
        // Big climb six samples ago, flat since: stable.
        let samples = [0.0, 50.0, 50.2, 50.1, 50.3, 50.2, 50.4];
        assert_eq!(classify_trend(&samples), Trend::Stable);
    }

    #[test]
    fn test_population_std_dev() {
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(population_std_dev(&[3.0, 3.0, 3.0]), 0.0);
        let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((sd - 2.0).abs() < 1e-9);
    }
}
