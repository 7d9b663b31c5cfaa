//! Solver strategy trait — the stepping abstraction the runner drives.

use crate::state::SurfaceState;

/// Result of a solver step.
#[derive(Debug, Clone, Default)]
pub struct StepResult {
    /// Spring evaluations skipped because both endpoints coincided.
    pub degenerate_springs: u32,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// Trait for time integration solvers.
///
/// ```text
/// let mut state = SurfaceState::from_vertices(&vertices)?;
/// loop {
///     solver.step(&mut state, dt);
///     sink.commit_positions(&frame_of(&state))?;
/// }
/// ```
///
/// `step` is total: it always completes and leaves `state` with the same
/// vertex count, however implausible the numbers inside it become.
pub trait SolverStrategy: Send {
    /// Advance the simulation by one timestep, mutating `state` in place.
    fn step(&mut self, state: &mut SurfaceState, dt: f32) -> StepResult;

    /// Returns the solver's name.
    fn name(&self) -> &str;
}
