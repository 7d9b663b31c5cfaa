//! Reading inputs from and writing outputs to disk.
//!
//! The format is chosen by file extension: `.json` or `.toml`.

use std::path::Path;

use tensile_types::{TensileError, TensileResult};

use crate::contract::{SimulationInput, SimulationOutput};

/// Load and validate a simulation input.
pub fn load_input(path: impl AsRef<Path>) -> TensileResult<SimulationInput> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let input: SimulationInput = match extension(path) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| TensileError::Serialization(format!("{}: {e}", path.display())))?,
        Some("toml") => toml::from_str(&content)
            .map_err(|e| TensileError::Serialization(format!("{}: {e}", path.display())))?,
        _ => {
            return Err(TensileError::Serialization(format!(
                "Unsupported input format: {} (use .json or .toml)",
                path.display()
            )))
        }
    };

    crate::validator::validate_input(&input)?;
    tracing::debug!(
        path = %path.display(),
        vertices = input.vertex_count(),
        steps = input.params.steps,
        "loaded simulation input"
    );
    Ok(input)
}

/// Write a simulation output as pretty-printed JSON.
pub fn save_output(path: impl AsRef<Path>, output: &SimulationOutput) -> TensileResult<()> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| TensileError::Serialization(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
