//! CLI command implementations.

use std::path::Path;

use tensile_bench::metrics::BenchmarkMetrics;
use tensile_bench::runner::BenchmarkRunner;
use tensile_bench::scenarios::{Scenario, ScenarioKind};
use tensile_io::{load_input, save_output, SimulationOutput};
use tensile_render::{HeadlessSurface, JsonFrameExporter, SurfaceSink};
use tensile_telemetry::{EventBus, TracingSink};

fn event_bus(trace_events: bool) -> Option<EventBus> {
    trace_events.then(|| {
        let mut bus = EventBus::new();
        bus.add_sink(Box::new(TracingSink::new()));
        bus
    })
}

/// Run a simulation from an input file.
pub fn simulate(
    input_path: &str,
    frames_path: Option<&str>,
    output_path: Option<&str>,
    trace_events: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tensile Simulation");
    println!("──────────────────");
    println!();

    let input = load_input(input_path)?;
    let name = Path::new(input_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string();
    let scenario = Scenario::from_input(name, input);

    println!(
        "Running: {} ({} verts, {} steps, dt={})",
        scenario.name,
        scenario.vertex_count(),
        scenario.timesteps,
        scenario.dt,
    );

    let mut sink: Box<dyn SurfaceSink> = match frames_path {
        Some(path) => Box::new(JsonFrameExporter::new(path, scenario.indices.clone())),
        None => Box::new(HeadlessSurface::new()),
    };
    let mut bus = event_bus(trace_events);

    let outcome = BenchmarkRunner::run_with(&scenario, &mut *sink, bus.as_mut())?;
    let metrics = &outcome.metrics;

    println!("  Wall time:     {:.3}s", metrics.total_wall_time);
    println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
    println!("  Max displace:  {:.4}m", metrics.max_displacement);
    if metrics.degenerate_springs > 0 {
        println!("  Degenerate:    {}", metrics.degenerate_springs);
    }
    if !metrics.finite {
        println!("  ⚠ Positions diverged; reduce dt or spring_constant.");
    }
    if let Some(path) = frames_path {
        println!("Frames written to: {path}");
    }

    if let Some(path) = output_path {
        let output = SimulationOutput {
            final_positions: outcome.state.current_positions(),
            metrics: metrics.to_simulation_metrics(),
        };
        save_output(path, &output)?;
        println!("Output written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    parallel: bool,
    output_path: Option<&str>,
    trace_events: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tensile Benchmark Suite");
    println!("═══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = ScenarioKind::from_name(scenario_name).ok_or_else(|| {
            let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
            format!(
                "Unknown scenario: '{scenario_name}'. Available: {}, all",
                available.join(", ")
            )
        })?;
        vec![kind]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let mut scenario = Scenario::from_kind(kind);
        if parallel {
            scenario = scenario.parallel();
        }

        println!(
            "Running: {} ({} verts, {} steps)",
            kind.name(),
            scenario.vertex_count(),
            scenario.timesteps,
        );

        let mut bus = event_bus(trace_events);
        let metrics = BenchmarkRunner::run_with(&scenario, &mut HeadlessSurface::new(), bus.as_mut())
            .map_err(|e| format!("Benchmark failed: {e}"))?
            .metrics;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}m", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    match output_path {
        Some(path) if path.ends_with(".json") => {
            std::fs::write(path, serde_json::to_string_pretty(&all_metrics)?)?;
            println!("Results written to: {path}");
        }
        Some(path) => {
            std::fs::write(path, BenchmarkMetrics::to_csv(&all_metrics))?;
            println!("Results written to: {path}");
        }
        None => {
            println!("CSV Output:");
            println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
        }
    }

    Ok(())
}

/// Validate a simulation input.
pub fn validate(input_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tensile Validator");
    println!("─────────────────");
    println!();
    println!("Validating input: {input_path}");

    match load_input(input_path) {
        Ok(input) => {
            let topology = tensile_mesh::GridTopology::resolve(
                input.vertex_count(),
                input.config.grid_width,
            )?;
            println!(
                "✅ Input is valid ({} verts, {}×{} grid, {} steps).",
                input.vertex_count(),
                topology.width(),
                topology.height(),
                input.params.steps,
            );
            Ok(())
        }
        Err(e) => {
            println!("❌ Validation failed: {e}");
            Err(e.into())
        }
    }
}
