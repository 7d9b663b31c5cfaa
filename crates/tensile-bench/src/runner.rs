//! Scenario runner — the step → publish loop with metric collection.

use std::time::Instant;

use tensile_render::{HeadlessSurface, SurfaceFrame, SurfaceSink};
use tensile_solver::{MassSpringSolver, SolverStrategy, SurfaceState};
use tensile_telemetry::{EventBus, EventKind, SimulationEvent};
use tensile_types::TensileResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::Scenario;

/// Metrics plus the final state of a run.
pub struct RunOutcome {
    pub metrics: BenchmarkMetrics,
    pub state: SurfaceState,
}

/// Runs scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a scenario headless.
    pub fn run(scenario: &Scenario) -> TensileResult<BenchmarkMetrics> {
        let mut sink = HeadlessSurface::new();
        Ok(Self::run_with(scenario, &mut sink, None)?.metrics)
    }

    /// Run a scenario, committing positions to `sink` after every step and
    /// emitting per-step events on `bus` when given.
    ///
    /// Fails only on an invalid scenario or a sink error; a diverging run
    /// completes and is reported through `metrics.finite`.
    pub fn run_with(
        scenario: &Scenario,
        sink: &mut dyn SurfaceSink,
        mut bus: Option<&mut EventBus>,
    ) -> TensileResult<RunOutcome> {
        let mut solver = MassSpringSolver::new(scenario.config.clone())?;
        let mut state = solver.init_state(&scenario.vertices)?;
        if let Some(ref velocities) = scenario.initial_velocities {
            state = state.with_initial_velocities(velocities)?;
        }

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut degenerate_springs: u64 = 0;
        let mut sim_time = 0.0f64;

        let total_start = Instant::now();

        for timestep in 0..scenario.timesteps {
            if let Some(bus) = bus.as_deref() {
                bus.emit(SimulationEvent::new(timestep, EventKind::TimestepBegin { sim_time }));
            }

            let result = solver.step(&mut state, scenario.dt);
            step_times.push(result.wall_time);
            degenerate_springs += u64::from(result.degenerate_springs);
            sim_time += f64::from(scenario.dt);

            let (pos_x, pos_y, pos_z) = state.position_channels();
            sink.commit_positions(&SurfaceFrame::new(timestep, pos_x, pos_y, pos_z))?;

            if let Some(bus) = bus.as_deref_mut() {
                bus.emit(SimulationEvent::new(
                    timestep,
                    EventKind::TimestepEnd { wall_time: result.wall_time },
                ));
                bus.emit(SimulationEvent::new(
                    timestep,
                    EventKind::Energy { kinetic: state.kinetic_energy() },
                ));
                if result.degenerate_springs > 0 {
                    bus.emit(SimulationEvent::new(
                        timestep,
                        EventKind::DegenerateSprings { count: result.degenerate_springs },
                    ));
                }
                bus.flush();
            }
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        sink.finalize()?;
        if let Some(bus) = bus {
            bus.finish();
        }

        let finite = state.is_finite();
        if !finite {
            tracing::warn!(
                scenario = %scenario.name,
                spring_constant = scenario.config.spring_constant,
                dt = scenario.dt,
                "simulation diverged to non-finite positions"
            );
        }

        let avg_step_time = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step_time = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step_time = step_times.iter().copied().fold(0.0, f64::max);

        let metrics = BenchmarkMetrics {
            scenario: scenario.name.clone(),
            vertex_count: state.vertex_count(),
            timesteps: scenario.timesteps,
            total_wall_time,
            avg_step_time,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step_time },
            max_step_time,
            final_kinetic_energy: state.kinetic_energy(),
            max_displacement: state.max_displacement(),
            degenerate_springs,
            finite,
        };

        tracing::info!(
            scenario = %metrics.scenario,
            vertices = metrics.vertex_count,
            steps = metrics.timesteps,
            wall_time = metrics.total_wall_time,
            solver = solver.name(),
            "scenario finished"
        );

        Ok(RunOutcome { metrics, state })
    }

    /// Run all built-in scenarios headless.
    pub fn run_all() -> TensileResult<Vec<BenchmarkMetrics>> {
        use crate::scenarios::ScenarioKind;
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
