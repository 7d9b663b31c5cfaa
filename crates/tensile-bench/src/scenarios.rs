//! Scenarios — initial vertex buffer + configuration + stepping for each case.
//!
//! 1. **Flat sheet** — 3×3 lattice at rest length under gravity
//! 2. **Sagging sheet** — 21×21 lattice under gravity
//! 3. **Plucked sheet** — weightless 15×15 lattice with its center lifted

use serde::{Deserialize, Serialize};

use tensile_io::SimulationInput;
use tensile_math::Vec3;
use tensile_solver::SolverConfig;
use tensile_types::constants::DEFAULT_DT;

/// Which built-in scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    FlatSheet,
    SaggingSheet,
    PluckedSheet,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::FlatSheet,
            ScenarioKind::SaggingSheet,
            ScenarioKind::PluckedSheet,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FlatSheet => "flat_sheet",
            ScenarioKind::SaggingSheet => "sagging_sheet",
            ScenarioKind::PluckedSheet => "plucked_sheet",
        }
    }

    /// Looks a scenario up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.name() == name)
    }
}

/// A fully specified run.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Label used in metrics and logs.
    pub name: String,
    /// Initial vertex buffer.
    pub vertices: Vec<Vec3>,
    /// Triangle indices for exporters (may be empty).
    pub indices: Vec<u32>,
    /// Optional initial velocities.
    pub initial_velocities: Option<Vec<Vec3>>,
    /// Solver configuration.
    pub config: SolverConfig,
    /// Number of timesteps to simulate.
    pub timesteps: u32,
    /// Timestep size (seconds).
    pub dt: f32,
}

impl Scenario {
    /// A scenario from a loaded simulation input.
    pub fn from_input(name: impl Into<String>, input: SimulationInput) -> Self {
        Self {
            name: name.into(),
            vertices: input.vertices,
            indices: input.indices,
            initial_velocities: input.initial_velocities,
            config: input.config,
            timesteps: input.params.steps,
            dt: input.params.dt,
        }
    }

    /// 3×3 lattice spaced exactly at rest length, falling under gravity.
    pub fn flat_sheet() -> Self {
        let mut scenario = Self::from_input(
            ScenarioKind::FlatSheet.name(),
            SimulationInput::lattice(3, 3, SolverConfig::default()),
        );
        scenario.timesteps = 60;
        scenario.dt = DEFAULT_DT;
        scenario
    }

    /// 21×21 lattice falling and crumpling under gravity for ~2 seconds.
    pub fn sagging_sheet() -> Self {
        let mut scenario = Self::from_input(
            ScenarioKind::SaggingSheet.name(),
            SimulationInput::lattice(21, 21, SolverConfig::default()),
        );
        scenario.timesteps = 120;
        scenario
    }

    /// Weightless 15×15 lattice with the center vertex lifted 5 cm,
    /// ringing down under damping.
    pub fn plucked_sheet() -> Self {
        let cols = 15;
        let mut scenario = Self::from_input(
            ScenarioKind::PluckedSheet.name(),
            SimulationInput::lattice(cols, cols, SolverConfig::weightless()),
        );
        let center = (cols / 2) * cols + cols / 2;
        scenario.vertices[center].y += 0.05;
        scenario.timesteps = 240;
        scenario
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::FlatSheet => Self::flat_sheet(),
            ScenarioKind::SaggingSheet => Self::sagging_sheet(),
            ScenarioKind::PluckedSheet => Self::plucked_sheet(),
        }
    }

    /// Same scenario, stepped on the rayon pool.
    pub fn parallel(mut self) -> Self {
        self.config.parallel = true;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
