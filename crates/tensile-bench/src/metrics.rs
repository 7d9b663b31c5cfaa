//! Benchmark metrics — data collected during a scenario run.

use serde::{Deserialize, Serialize};
use tensile_io::SimulationMetrics;

/// Metrics collected from a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Vertex count.
    pub vertex_count: usize,
    /// Number of timesteps executed.
    pub timesteps: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per timestep (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Unit-mass kinetic energy after the last step.
    pub final_kinetic_energy: f64,
    /// Maximum vertex displacement from the rest position.
    pub max_displacement: f32,
    /// Zero-length spring evaluations over the run.
    pub degenerate_springs: u64,
    /// False if the run diverged.
    pub finite: bool,
}

impl BenchmarkMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,vertex_count,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,max_displacement,degenerate_springs,finite".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6},{},{}",
            self.scenario,
            self.vertex_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.degenerate_springs,
            self.finite,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }

    /// The subset reported in a simulation output file.
    pub fn to_simulation_metrics(&self) -> SimulationMetrics {
        SimulationMetrics {
            wall_time_seconds: self.total_wall_time,
            timestep_count: self.timesteps,
            final_kinetic_energy: self.final_kinetic_energy,
            max_displacement: self.max_displacement,
            degenerate_springs: self.degenerate_springs,
            finite: self.finite,
        }
    }
}
