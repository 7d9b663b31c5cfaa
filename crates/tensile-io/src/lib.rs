//! # tensile-io
//!
//! Simulation input/output contract, input validation, and file loading.
//!
//! Defines the boundary types that external systems (CLI, host
//! applications, asset pipelines) use to hand a vertex buffer and
//! configuration to the simulation core.

pub mod contract;
pub mod loader;
pub mod validator;

pub use contract::{RunParams, SimulationInput, SimulationMetrics, SimulationOutput};
pub use loader::{load_input, save_output};
pub use validator::validate_input;
