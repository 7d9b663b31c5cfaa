//! Integration tests for tensile-bench.

use tensile_bench::metrics::BenchmarkMetrics;
use tensile_bench::runner::BenchmarkRunner;
use tensile_bench::scenarios::{Scenario, ScenarioKind};
use tensile_io::SimulationInput;
use tensile_math::Vec3;
use tensile_mesh::generators::lattice_mesh;
use tensile_render::{HeadlessSurface, MeshSurface, SurfaceSink};
use tensile_solver::SolverConfig;
use tensile_telemetry::{EventBus, EventKind, VecSink};

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn flat_sheet_setup() {
    let s = Scenario::flat_sheet();
    assert_eq!(s.name, "flat_sheet");
    assert_eq!(s.vertex_count(), 9);
    assert_eq!(s.indices.len(), 2 * 2 * 6);
    assert!(s.initial_velocities.is_none());
}

#[test]
fn sagging_sheet_setup() {
    let s = Scenario::sagging_sheet();
    assert_eq!(s.vertex_count(), 441); // 21×21
    assert_eq!(s.indices.len(), 20 * 20 * 6);
    assert!(s.config.gravity[1] < 0.0);
}

#[test]
fn plucked_sheet_lifts_center_only() {
    let s = Scenario::plucked_sheet();
    assert_eq!(s.vertex_count(), 225);
    assert_eq!(s.config.gravity, [0.0, 0.0, 0.0]);

    let lifted: Vec<usize> = (0..s.vertex_count())
        .filter(|&i| s.vertices[i].y != 0.0)
        .collect();
    assert_eq!(lifted, vec![7 * 15 + 7]);
    assert!((s.vertices[lifted[0]].y - 0.05).abs() < 1e-6);
}

#[test]
fn all_scenarios_have_unique_names() {
    let kinds = ScenarioKind::all();
    assert_eq!(kinds.len(), 3);
    for kind in kinds {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(*kind));
        assert_eq!(Scenario::from_kind(*kind).name, kind.name());
    }
    assert_eq!(ScenarioKind::from_name("sphere_drape"), None);
}

#[test]
fn scenario_from_input_keeps_run_params() {
    let mut input = SimulationInput::lattice(4, 2, SolverConfig::default());
    input.params.steps = 7;
    input.params.dt = 0.005;
    let s = Scenario::from_input("custom", input);
    assert_eq!(s.name, "custom");
    assert_eq!(s.timesteps, 7);
    assert_eq!(s.dt, 0.005);
    assert_eq!(s.config.grid_width, Some(4));
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_flat_sheet() {
    let mut scenario = Scenario::flat_sheet();
    scenario.timesteps = 5;

    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "flat_sheet");
    assert_eq!(metrics.vertex_count, 9);
    assert_eq!(metrics.timesteps, 5);
    assert!(metrics.total_wall_time > 0.0);
    assert!(metrics.min_step_time <= metrics.avg_step_time);
    assert!(metrics.avg_step_time <= metrics.max_step_time);
    assert!(metrics.final_kinetic_energy > 0.0);
    assert!(metrics.max_displacement > 0.0);
    assert_eq!(metrics.degenerate_springs, 0);
    assert!(metrics.finite);
}

#[test]
fn flat_sheet_falls_rigidly() {
    let mut scenario = Scenario::flat_sheet();
    scenario.timesteps = 10;
    let mut sink = HeadlessSurface::new();

    let outcome = BenchmarkRunner::run_with(&scenario, &mut sink, None).unwrap();

    assert_eq!(sink.frame_count(), 10);
    let y0 = outcome.state.position(0).y;
    assert!(y0 < 0.0);
    for i in 0..9 {
        let p = outcome.state.position(i);
        let rest = scenario.vertices[i];
        assert!((p.y - y0).abs() < 1e-4, "vertex {i} y = {}", p.y);
        assert!((p.x - rest.x).abs() < 1e-4);
        assert!((p.z - rest.z).abs() < 1e-4);
    }
}

#[test]
fn plucked_sheet_stays_bounded() {
    let metrics = BenchmarkRunner::run(&Scenario::plucked_sheet()).unwrap();
    assert!(metrics.finite);
    assert!(metrics.max_displacement > 0.0);
    assert!(metrics.final_kinetic_energy < 1.0);
}

#[test]
fn parallel_run_matches_sequential() {
    let mut seq = Scenario::plucked_sheet();
    seq.timesteps = 20;
    let par = seq.clone().parallel();

    let mut a = HeadlessSurface::new();
    let mut b = HeadlessSurface::new();
    let seq_out = BenchmarkRunner::run_with(&seq, &mut a, None).unwrap();
    let par_out = BenchmarkRunner::run_with(&par, &mut b, None).unwrap();

    assert_eq!(seq_out.state.current_positions(), par_out.state.current_positions());
    assert_eq!(seq_out.metrics.final_kinetic_energy, par_out.metrics.final_kinetic_energy);
}

#[test]
fn coincident_vertices_count_degenerate_springs() {
    let mut config = SolverConfig::weightless();
    config.grid_width = Some(2);
    let scenario = Scenario {
        name: "coincident".into(),
        vertices: vec![Vec3::ZERO, Vec3::ZERO],
        indices: Vec::new(),
        initial_velocities: None,
        config,
        timesteps: 3,
        dt: 0.016,
    };

    let metrics = BenchmarkRunner::run(&scenario).unwrap();
    // Two directed springs per step, and the vertices never separate.
    assert_eq!(metrics.degenerate_springs, 6);
    assert!(metrics.finite);
}

#[test]
fn initial_velocities_are_applied() {
    let mut scenario = Scenario::flat_sheet();
    scenario.config = SolverConfig::weightless();
    scenario.timesteps = 1;
    scenario.initial_velocities = Some(vec![Vec3::new(1.0, 0.0, 0.0); 9]);

    let outcome = BenchmarkRunner::run_with(&scenario, &mut HeadlessSurface::new(), None).unwrap();
    let v = outcome.state.velocity(4);
    assert!((v.x - 0.98).abs() < 1e-4);
}

#[test]
fn invalid_config_is_rejected_before_stepping() {
    let mut scenario = Scenario::flat_sheet();
    scenario.config.spring_constant = -1.0;
    assert!(BenchmarkRunner::run(&scenario).is_err());
}

#[test]
fn diverging_run_reports_non_finite() {
    let mut scenario = Scenario::plucked_sheet();
    scenario.config.spring_constant = 1.0e6;
    scenario.dt = 0.1;
    scenario.timesteps = 200;

    let metrics = BenchmarkRunner::run(&scenario).unwrap();
    assert!(!metrics.finite);
}

#[test]
fn mesh_surface_tracks_run() {
    let mut scenario = Scenario::flat_sheet();
    scenario.timesteps = 4;
    let mut surface = MeshSurface::new(lattice_mesh(3, 3, scenario.config.rest_length));

    let outcome = BenchmarkRunner::run_with(&scenario, &mut surface, None).unwrap();

    assert_eq!(surface.frame_count(), 4);
    for i in 0..9 {
        assert_eq!(surface.mesh().position(i), outcome.state.position(i));
    }
}

#[test]
fn run_emits_events_per_step() {
    let mut scenario = Scenario::flat_sheet();
    scenario.timesteps = 3;
    let sink = VecSink::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink.clone()));

    BenchmarkRunner::run_with(&scenario, &mut HeadlessSurface::new(), Some(&mut bus)).unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 9);
    assert!(matches!(events[0].kind, EventKind::TimestepBegin { sim_time } if sim_time == 0.0));
    assert!(matches!(events[1].kind, EventKind::TimestepEnd { .. }));
    assert!(matches!(events[2].kind, EventKind::Energy { kinetic } if kinetic > 0.0));
    assert_eq!(events[8].timestep, 2);
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample_metrics() -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: "flat_sheet".into(),
        vertex_count: 9,
        timesteps: 10,
        total_wall_time: 0.5,
        avg_step_time: 0.05,
        min_step_time: 0.04,
        max_step_time: 0.06,
        final_kinetic_energy: 1.25,
        max_displacement: 0.02,
        degenerate_springs: 0,
        finite: true,
    }
}

#[test]
fn metrics_csv_format() {
    let m = sample_metrics();
    let header = BenchmarkMetrics::to_csv_header();
    let row = m.to_csv_row();
    assert_eq!(header.split(',').count(), row.split(',').count());
    assert!(row.starts_with("flat_sheet,9,10,"));
    assert!(row.ends_with(",0,true"));
}

#[test]
fn metrics_to_csv_multiple() {
    let metrics = vec![sample_metrics(), sample_metrics()];
    let csv = BenchmarkMetrics::to_csv(&metrics);
    assert_eq!(csv.lines().count(), 3); // header + 2 rows
}

#[test]
fn metrics_json_round_trip() {
    let m = sample_metrics();
    let json = serde_json::to_string(&m).unwrap();
    let back: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scenario, m.scenario);
    assert_eq!(back.final_kinetic_energy, m.final_kinetic_energy);
}

#[test]
fn metrics_convert_to_simulation_metrics() {
    let sim = sample_metrics().to_simulation_metrics();
    assert_eq!(sim.timestep_count, 10);
    assert_eq!(sim.wall_time_seconds, 0.5);
    assert!(sim.finite);
}
