//! Mass-spring solver: a validated configuration driving the integrator.

use std::time::Instant;

use tensile_math::Vec3;
use tensile_types::TensileResult;

use crate::config::SolverConfig;
use crate::integrator::{self, StepParams};
use crate::state::SurfaceState;
use crate::strategy::{SolverStrategy, StepResult};

/// Explicit mass-spring solver over an implicit grid.
///
/// Configuration is checked at construction and on every
/// [`set_config`](Self::set_config); stepping itself never fails.
#[derive(Debug, Clone)]
pub struct MassSpringSolver {
    config: SolverConfig,
}

impl MassSpringSolver {
    /// Creates a solver, rejecting non-positive `spring_constant`/`rest_length`.
    pub fn new(config: SolverConfig) -> TensileResult<Self> {
        config.validate()?;
        tracing::debug!(
            spring_constant = config.spring_constant,
            rest_length = config.rest_length,
            damping = config.damping,
            parallel = config.parallel,
            "mass-spring solver configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Replace the configuration between steps.
    ///
    /// `grid_width` only affects states created afterwards with
    /// [`init_state`](Self::init_state).
    pub fn set_config(&mut self, config: SolverConfig) -> TensileResult<()> {
        config.validate()?;
        tracing::debug!(?config, "mass-spring solver reconfigured");
        self.config = config;
        Ok(())
    }

    /// Build a surface state laid out with this solver's grid width.
    pub fn init_state(&self, vertices: &[Vec3]) -> TensileResult<SurfaceState> {
        SurfaceState::new(vertices, self.config.grid_width)
    }
}

impl SolverStrategy for MassSpringSolver {
    fn step(&mut self, state: &mut SurfaceState, dt: f32) -> StepResult {
        let start = Instant::now();
        let params = StepParams::from_config(&self.config, dt);

        let degenerate_springs = if self.config.parallel {
            integrator::step_parallel(state, &params)
        } else {
            integrator::step(state, &params)
        };

        StepResult {
            degenerate_springs,
            wall_time: start.elapsed().as_secs_f64(),
        }
    }

    fn name(&self) -> &str {
        if self.config.parallel {
            "mass_spring_parallel"
        } else {
            "mass_spring"
        }
    }
}
