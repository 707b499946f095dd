//! Capped reading history.
//!
//! The buffer is owned by whatever schedules the ticks, not by the
//! simulator or the analyzer; it is the one piece of shared mutable state
//! in the pipeline, so keep a single writer per tick.

use crate::reading::Reading;
use habsim_logic::thresholds::Metric;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fewest buffered readings the analyzer needs for meaningful output.
pub const MIN_ANALYSIS_LEN: usize = 5;

/// Default retention, matching the dashboard's 50-reading window.
pub const DEFAULT_CAPACITY: usize = 50;

/// FIFO buffer of recent readings; the oldest is evicted at capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryBuffer {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, reading: Reading) {
        if self.readings.len() == self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// One metric's series in insertion order. Readings that lack the
    /// metric (a power-less facility source) are skipped.
    pub fn metric_series(&self, metric: Metric) -> Vec<f64> {
        self.readings
            .iter()
            .filter_map(|r| metric_value(r, metric))
            .collect()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract one metric's value from a reading.
pub fn metric_value(reading: &Reading, metric: Metric) -> Option<f64> {
    match metric {
        Metric::Temperature => Some(reading.temperature()),
        Metric::PrimaryGas => Some(reading.primary_gas()),
        Metric::Power => reading.power(),
        Metric::Stability => Some(reading.stability_score()),
    }
}
