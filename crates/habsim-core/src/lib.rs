//! habsim core: environmental telemetry simulation and analysis.
//!
//! Two independent, composable components:
//! - [`simulator::TelemetrySimulator`] produces one synthetic reading per
//!   tick: slow correlated drift plus rare bounded crisis episodes.
//! - [`analyzer::analyze`] is a pure pass over a capped history buffer:
//!   per-metric forecasts, trend and alert classification, and z-score
//!   anomaly flags.
//!
//! Data flows one way: simulator → history buffer → analyzer. The caller
//! owns the buffer and the tick cadence; the two components never call
//! each other.
//!
//! # Example
//!
//! ```
//! use habsim_core::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut sim = TelemetrySimulator::new(Profile::Habitat);
//! let mut history = HistoryBuffer::new();
//!
//! for _ in 0..20 {
//!     history.push(sim.generate(&mut rng));
//! }
//!
//! let current = history.latest().cloned().unwrap();
//! let report = analyze(&history, &current);
//! assert_eq!(report.predictions.len(), 4);
//! ```

pub mod analyzer;
pub mod config;
pub mod history;
pub mod reading;
pub mod simulator;

/// Commonly used types for convenient importing.
pub mod prelude {
    pub use crate::analyzer::{analyze, AnalysisReport, AnomalyFlag, Prediction};
    pub use crate::config::ProfileConfig;
    pub use crate::history::HistoryBuffer;
    pub use crate::reading::{CrisisKind, FacilityReading, HabitatReading, Reading};
    pub use crate::simulator::TelemetrySimulator;
    pub use habsim_logic::profile::{InvalidProfile, Profile};
    pub use habsim_logic::stats::Trend;
    pub use habsim_logic::thresholds::{AlertLevel, Metric};
}
