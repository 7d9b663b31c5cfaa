//! JSON frame exporter — writes per-frame vertex data for visual inspection.
//!
//! Captures vertex positions at each commit, then serializes the whole
//! animation to a JSON file on `finalize()`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tensile_types::{TensileError, TensileResult};

use crate::surface::{SurfaceFrame, SurfaceSink};

/// A single frame of captured vertex data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameData {
    pub timestep: u32,
    /// Interleaved `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
}

/// Complete animation data for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationData {
    pub vertex_count: usize,
    /// Triangle indices for viewers; empty for a bare point cloud.
    pub indices: Vec<u32>,
    pub frames: Vec<FrameData>,
}

/// Exports committed frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json", indices);
/// // ... commit_positions() after every step ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    indices: Vec<u32>,
    vertex_count: Option<usize>,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    /// Creates an exporter that will write to `output_path`.
    pub fn new(output_path: impl Into<PathBuf>, indices: Vec<u32>) -> Self {
        Self {
            output_path: output_path.into(),
            indices,
            vertex_count: None,
            frames: Vec::new(),
        }
    }

    /// The animation collected so far.
    pub fn animation(&self) -> AnimationData {
        AnimationData {
            vertex_count: self.vertex_count.unwrap_or(0),
            indices: self.indices.clone(),
            frames: self.frames.clone(),
        }
    }
}

impl SurfaceSink for JsonFrameExporter {
    fn commit_positions(&mut self, frame: &SurfaceFrame<'_>) -> TensileResult<()> {
        let n = frame.vertex_count();
        match self.vertex_count {
            Some(expected) if expected != n => {
                return Err(TensileError::InvalidMesh(format!(
                    "Frame {} has {} vertices, earlier frames had {}",
                    frame.timestep, n, expected
                )));
            }
            Some(_) => {}
            None => self.vertex_count = Some(n),
        }

        let mut positions = Vec::with_capacity(n * 3);
        for i in 0..n {
            positions.push(frame.pos_x[i]);
            positions.push(frame.pos_y[i]);
            positions.push(frame.pos_z[i]);
        }
        self.frames.push(FrameData {
            timestep: frame.timestep,
            positions,
        });
        Ok(())
    }

    fn finalize(&mut self) -> TensileResult<()> {
        let data = AnimationData {
            vertex_count: self.vertex_count.unwrap_or(0),
            indices: self.indices.clone(),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data).map_err(|e| {
            TensileError::Serialization(format!("JSON serialization failed: {e}"))
        })?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
