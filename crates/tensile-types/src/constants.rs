//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds). Roughly one 60 Hz frame.
pub const DEFAULT_DT: f32 = 0.016;

/// Default Hooke spring constant `k` shared by every spring edge.
pub const DEFAULT_SPRING_CONSTANT: f32 = 50.0;

/// Default per-step velocity retention factor.
pub const DEFAULT_DAMPING: f32 = 0.98;

/// Default spring rest length (meters). Orthogonal and diagonal edges share it.
pub const DEFAULT_REST_LENGTH: f32 = 0.1;
