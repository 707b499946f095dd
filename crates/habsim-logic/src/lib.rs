//! Pure telemetry analysis logic for habsim.
//!
//! This crate contains the numeric and classification logic that is
//! independent of any clock, RNG, or transport. Functions take plain data
//! and return results, making them unit-testable and portable between the
//! simulation core, the headless harness, and any future consumer.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`advisory`] | Rule-cascade operational advisories from alert context |
//! | [`alerts`] | Threshold alerts (info/warning/critical) from one reading |
//! | [`anomaly`] | Z-score anomaly test and severity grading |
//! | [`profile`] | Operating profiles and fail-fast profile parsing |
//! | [`stability`] | Weighted-penalty 0–100 stability scoring |
//! | [`stats`] | Windowed forecasts, confidence, trend classification |
//! | [`thresholds`] | Versioned per-profile alert-level threshold tables |

pub mod advisory;
pub mod alerts;
pub mod anomaly;
pub mod profile;
pub mod stability;
pub mod stats;
pub mod thresholds;
