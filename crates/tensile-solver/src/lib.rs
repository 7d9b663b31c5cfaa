//! # tensile-solver
//!
//! Time integration and simulation state for the mass-spring surface.
//!
//! ## Key Types
//!
//! - [`SurfaceState`] — SoA buffers for rest positions, displaced positions,
//!   and velocities, plus the grid layout they are coupled by
//! - [`integrator`] — One explicit (semi-implicit Euler) step: gravity,
//!   spring accumulation, damping, position update
//! - [`SolverStrategy`] — Pluggable stepping trait
//! - [`MassSpringSolver`] — Configured solver driving the integrator
//! - [`SolverConfig`] — Spring constant, rest length, damping, gravity
//!
//! ## Stability
//!
//! The integrator is explicit and performs no stabilization. Keeping
//! `k · dt² ≪ 1` and `damping < 1` is the caller's job; an unstable
//! configuration yields non-finite positions rather than an error.

pub mod config;
pub mod integrator;
pub mod mass_spring;
pub mod state;
pub mod strategy;

pub use config::SolverConfig;
pub use integrator::StepParams;
pub use mass_spring::MassSpringSolver;
pub use state::SurfaceState;
pub use strategy::{SolverStrategy, StepResult};
