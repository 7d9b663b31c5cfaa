//! # tensile-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (timing, energy, degenerate springs) that can be consumed
//! by pluggable sinks (in-memory buffers, `tracing` logs).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
