//! Solver configuration.
//!
//! Spring, damping, and gravity parameters shared by every spring edge
//! and vertex of a simulated surface.

use serde::{Deserialize, Serialize};
use tensile_math::Vec3;
use tensile_types::constants;
use tensile_types::{TensileError, TensileResult};

/// Configuration for the mass-spring solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Hooke spring constant `k` (> 0), uniform across all edges.
    pub spring_constant: f32,

    /// Per-step velocity multiplier, typically in (0, 1).
    /// Values ≥ 1 add energy; this is not checked.
    pub damping: f32,

    /// Spring rest length (> 0). Diagonal edges use the same value.
    pub rest_length: f32,

    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Explicit grid row width. `None` infers a square grid from the
    /// vertex count.
    pub grid_width: Option<usize>,

    /// Run the per-vertex pass on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            spring_constant: constants::DEFAULT_SPRING_CONSTANT,
            damping: constants::DEFAULT_DAMPING,
            rest_length: constants::DEFAULT_REST_LENGTH,
            gravity: [0.0, -constants::GRAVITY, 0.0],
            grid_width: None,
            parallel: false,
        }
    }
}

impl SolverConfig {
    /// No gravity; only springs and damping act.
    pub fn weightless() -> Self {
        Self {
            gravity: [0.0; 3],
            ..Default::default()
        }
    }

    /// Stiffer springs with stronger damping, for taut sheets.
    pub fn stiff() -> Self {
        Self {
            spring_constant: 400.0,
            damping: 0.9,
            ..Default::default()
        }
    }

    #[inline]
    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    /// Rejects settings the integrator cannot be constructed with.
    ///
    /// `damping` and `gravity` are left to the caller.
    pub fn validate(&self) -> TensileResult<()> {
        if !(self.spring_constant.is_finite() && self.spring_constant > 0.0) {
            return Err(TensileError::InvalidConfiguration(format!(
                "spring_constant must be positive, got {}",
                self.spring_constant
            )));
        }
        if !(self.rest_length.is_finite() && self.rest_length > 0.0) {
            return Err(TensileError::InvalidConfiguration(format!(
                "rest_length must be positive, got {}",
                self.rest_length
            )));
        }
        if self.grid_width == Some(0) {
            return Err(TensileError::InvalidConfiguration(
                "grid_width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
