//! Simulation input validation.
//!
//! The core accepts any positive `dt` and any damping; this is where a
//! host rejects nonsensical runs before they reach the solver.

use tensile_mesh::GridTopology;
use tensile_types::{TensileError, TensileResult};

use crate::contract::{RunParams, SimulationInput};

/// `k · dt²` above this is very likely to blow up the explicit integrator.
const STABILITY_WARN_THRESHOLD: f32 = 0.1;

/// Validates a complete simulation input.
///
/// Checks:
/// - Vertex buffer is non-empty and finite
/// - Triangle indices are within range
/// - Initial velocities (if any) match the vertex count
/// - Solver configuration and run parameters are valid
///
/// A non-square inferred grid and a likely-unstable `k · dt²` are logged
/// as warnings, not rejected.
pub fn validate_input(input: &SimulationInput) -> TensileResult<()> {
    let n = input.vertices.len();
    if n == 0 {
        return Err(TensileError::InvalidConfiguration(
            "Vertex buffer is empty".into(),
        ));
    }
    if let Some(i) = input.vertices.iter().position(|v| !v.is_finite()) {
        return Err(TensileError::InvalidMesh(format!(
            "Vertex {} has a non-finite position",
            i
        )));
    }

    if input.indices.len() % 3 != 0 {
        return Err(TensileError::InvalidMesh(
            "Index count is not divisible by 3".into(),
        ));
    }
    if let Some(&idx) = input.indices.iter().find(|&&idx| idx as usize >= n) {
        return Err(TensileError::InvalidMesh(format!(
            "Index {} is out of range (vertex count: {})",
            idx, n
        )));
    }

    if let Some(ref velocities) = input.initial_velocities {
        if velocities.len() != n {
            return Err(TensileError::InvalidConfiguration(format!(
                "Initial velocity count ({}) != vertex count ({})",
                velocities.len(),
                n
            )));
        }
        if velocities.iter().any(|v| !v.is_finite()) {
            return Err(TensileError::InvalidConfiguration(
                "Initial velocities must be finite".into(),
            ));
        }
    }

    input.config.validate()?;
    validate_params(&input.params)?;

    let topology = GridTopology::resolve(n, input.config.grid_width)?;
    if !topology.is_exact() {
        tracing::warn!(
            vertex_count = n,
            width = topology.width(),
            height = topology.height(),
            "vertex count does not fill the grid; neighbor mapping is approximate"
        );
    }

    let stiffness = input.config.spring_constant * input.params.dt * input.params.dt;
    if stiffness > STABILITY_WARN_THRESHOLD {
        tracing::warn!(
            k_dt2 = stiffness,
            "spring constant and timestep are likely to make the integrator unstable"
        );
    }

    Ok(())
}

/// Validates run parameters.
fn validate_params(params: &RunParams) -> TensileResult<()> {
    if !(params.dt.is_finite() && params.dt > 0.0) {
        return Err(TensileError::InvalidConfiguration(
            "Timestep dt must be positive".into(),
        ));
    }
    if params.dt > 1.0 {
        return Err(TensileError::InvalidConfiguration(
            "Timestep dt > 1.0 is unreasonably large".into(),
        ));
    }
    if params.steps == 0 {
        return Err(TensileError::InvalidConfiguration(
            "Step count must be >= 1".into(),
        ));
    }
    Ok(())
}
