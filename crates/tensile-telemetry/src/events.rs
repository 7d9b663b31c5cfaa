//! Simulation event types.
//!
//! Structured events emitted around each timestep. Events are lightweight
//! value types carrying just enough data for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event, tagged with the timestep it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Timestep number (0-indexed).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Timestep started.
    TimestepBegin {
        /// Simulated time at the start of this step (seconds).
        sim_time: f64,
    },

    /// Timestep completed.
    TimestepEnd {
        /// Wall-clock time spent in the step (seconds).
        wall_time: f64,
    },

    /// Unit-mass kinetic energy `Σ|v|²` after the step.
    Energy {
        kinetic: f64,
    },

    /// Springs that were skipped because their endpoints coincided.
    DegenerateSprings {
        count: u32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given timestep.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}
