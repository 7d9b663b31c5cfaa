//! Surface sink trait and in-process sinks.

use tensile_math::Vec3;
use tensile_mesh::normals::compute_vertex_normals;
use tensile_mesh::TriangleMesh;
use tensile_types::{TensileError, TensileResult};

/// One published frame: borrowed position channels, no copy.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceFrame<'a> {
    /// Timestep this frame corresponds to.
    pub timestep: u32,
    pub pos_x: &'a [f32],
    pub pos_y: &'a [f32],
    pub pos_z: &'a [f32],
}

impl<'a> SurfaceFrame<'a> {
    /// Create a frame from position SoA buffers.
    pub fn new(timestep: u32, pos_x: &'a [f32], pos_y: &'a [f32], pos_z: &'a [f32]) -> Self {
        Self {
            timestep,
            pos_x,
            pos_y,
            pos_z,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }
}

/// Receiver of simulated positions.
///
/// # Implementations
/// - [`HeadlessSurface`] — Discards frames
/// - [`MeshSurface`] — Updates a triangle mesh and its normals
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — Animation file
pub trait SurfaceSink: Send {
    /// Publish the positions of one step. Called once after each step.
    fn commit_positions(&mut self, frame: &SurfaceFrame<'_>) -> TensileResult<()>;

    /// Finalize output (flush buffers, close files, etc.).
    fn finalize(&mut self) -> TensileResult<()> {
        Ok(())
    }

    /// Returns the sink name.
    fn name(&self) -> &str;

    /// Returns the number of frames committed.
    fn frame_count(&self) -> u32;
}

/// Headless sink — discards all frames.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    frames: u32,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SurfaceSink for HeadlessSurface {
    fn commit_positions(&mut self, _frame: &SurfaceFrame<'_>) -> TensileResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}

/// Renderable-surface stand-in: a triangle mesh whose positions are
/// overwritten on each commit, followed by a full normal recomputation.
#[derive(Debug)]
pub struct MeshSurface {
    mesh: TriangleMesh,
    frames: u32,
}

impl MeshSurface {
    pub fn new(mesh: TriangleMesh) -> Self {
        Self { mesh, frames: 0 }
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> TriangleMesh {
        self.mesh
    }
}

impl SurfaceSink for MeshSurface {
    fn commit_positions(&mut self, frame: &SurfaceFrame<'_>) -> TensileResult<()> {
        if frame.vertex_count() != self.mesh.vertex_count() {
            return Err(TensileError::InvalidMesh(format!(
                "Frame has {} vertices, surface has {}",
                frame.vertex_count(),
                self.mesh.vertex_count()
            )));
        }
        self.mesh.pos_x.copy_from_slice(frame.pos_x);
        self.mesh.pos_y.copy_from_slice(frame.pos_y);
        self.mesh.pos_z.copy_from_slice(frame.pos_z);
        compute_vertex_normals(&mut self.mesh);
        self.frames += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "mesh_surface"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
