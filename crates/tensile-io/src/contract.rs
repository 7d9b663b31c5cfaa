//! Simulation input/output contract types.
//!
//! Serializable for CLI files and API transport. Vectors serialize as
//! `[x, y, z]` arrays.

use serde::{Deserialize, Serialize};
use tensile_math::Vec3;
use tensile_mesh::generators::{flat_lattice, lattice_indices};
use tensile_solver::SolverConfig;
use tensile_types::constants;

/// Everything needed to start a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Initial vertex buffer, row-major over the grid.
    pub vertices: Vec<Vec3>,

    /// Optional triangle indices, passed through to exported frames.
    #[serde(default)]
    pub indices: Vec<u32>,

    /// Optional initial velocities; zero when absent.
    #[serde(default)]
    pub initial_velocities: Option<Vec<Vec3>>,

    /// Solver configuration.
    #[serde(default)]
    pub config: SolverConfig,

    /// Stepping parameters.
    #[serde(default)]
    pub params: RunParams,
}

/// Stepping parameters for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Timestep in seconds.
    pub dt: f32,
    /// Number of steps to run.
    pub steps: u32,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            dt: constants::DEFAULT_DT,
            steps: 120,
        }
    }
}

impl SimulationInput {
    /// A flat `cols × rows` lattice spaced at the configured rest length.
    pub fn lattice(cols: usize, rows: usize, config: SolverConfig) -> Self {
        let vertices = flat_lattice(cols, rows, config.rest_length, 0.0);
        let grid_width = if cols == rows { config.grid_width } else { Some(cols) };
        Self {
            vertices,
            indices: lattice_indices(cols, rows),
            initial_velocities: None,
            config: SolverConfig { grid_width, ..config },
            params: RunParams::default(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Output from a completed simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// Positions after the last step, index-aligned with the input.
    pub final_positions: Vec<Vec3>,
    pub metrics: SimulationMetrics,
}

/// Aggregate metrics from a simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Total wall-clock time (seconds).
    pub wall_time_seconds: f64,
    /// Number of timesteps executed.
    pub timestep_count: u32,
    /// Unit-mass kinetic energy after the last step.
    pub final_kinetic_energy: f64,
    /// Largest distance of any vertex from its rest position.
    pub max_displacement: f32,
    /// Zero-length spring evaluations over the whole run.
    pub degenerate_springs: u64,
    /// False if the run diverged to NaN/infinity.
    pub finite: bool,
}
