//! # tensile-bench
//!
//! Scenario runner for the tensile engine.
//!
//! Provides procedural scenarios, the step → publish loop that drives
//! them, metric collection, and CSV/JSON export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::{BenchmarkRunner, RunOutcome};
pub use scenarios::{Scenario, ScenarioKind};
