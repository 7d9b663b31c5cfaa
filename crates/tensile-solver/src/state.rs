//! Surface state — SoA buffers for all per-vertex data.
//!
//! The state is initialized once from a copied vertex buffer and keeps a
//! fixed vertex count for its whole life. Only the integrator mutates the
//! displaced positions and velocities.

use tensile_math::Vec3;
use tensile_mesh::{GridTopology, TriangleMesh};
use tensile_types::{TensileError, TensileResult};

/// SoA simulation state buffers.
///
/// # Layout
///
/// All arrays have length `vertex_count`, index-aligned with the vertex
/// buffer the state was created from:
/// ```text
/// pos_x: [x0, x1, x2, ...]
/// pos_y: [y0, y1, y2, ...]
/// ...
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceState {
    pub(crate) vertex_count: usize,
    pub(crate) topology: GridTopology,

    // ─── Rest position (seed only, never a per-frame anchor) ───
    pub(crate) rest_x: Vec<f32>,
    pub(crate) rest_y: Vec<f32>,
    pub(crate) rest_z: Vec<f32>,

    // ─── Displaced position ───
    pub(crate) pos_x: Vec<f32>,
    pub(crate) pos_y: Vec<f32>,
    pub(crate) pos_z: Vec<f32>,

    // ─── Velocity ───
    pub(crate) vel_x: Vec<f32>,
    pub(crate) vel_y: Vec<f32>,
    pub(crate) vel_z: Vec<f32>,

    // ─── Pre-step positions, read by every spring during a step ───
    pub(crate) prev_x: Vec<f32>,
    pub(crate) prev_y: Vec<f32>,
    pub(crate) prev_z: Vec<f32>,
}

impl SurfaceState {
    /// Initialize from a vertex buffer on an inferred square grid.
    pub fn from_vertices(vertices: &[Vec3]) -> TensileResult<Self> {
        Self::new(vertices, None)
    }

    /// Initialize from a vertex buffer.
    ///
    /// The buffer is copied into the rest and displaced arrays; velocities
    /// start at zero. `grid_width` overrides the `round(sqrt(N))` inference.
    ///
    /// Fails with `InvalidConfiguration` on an empty buffer or a zero
    /// width, and with `InvalidMesh` on non-finite coordinates.
    pub fn new(vertices: &[Vec3], grid_width: Option<usize>) -> TensileResult<Self> {
        let n = vertices.len();
        if n == 0 {
            return Err(TensileError::InvalidConfiguration(
                "Vertex buffer is empty".into(),
            ));
        }
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(TensileError::InvalidMesh(format!(
                "Vertex {} has non-finite position {:?}",
                i, vertices[i]
            )));
        }

        let topology = GridTopology::resolve(n, grid_width)?;

        let rest_x: Vec<f32> = vertices.iter().map(|v| v.x).collect();
        let rest_y: Vec<f32> = vertices.iter().map(|v| v.y).collect();
        let rest_z: Vec<f32> = vertices.iter().map(|v| v.z).collect();

        Ok(Self {
            vertex_count: n,
            topology,
            pos_x: rest_x.clone(),
            pos_y: rest_y.clone(),
            pos_z: rest_z.clone(),
            prev_x: rest_x.clone(),
            prev_y: rest_y.clone(),
            prev_z: rest_z.clone(),
            rest_x,
            rest_y,
            rest_z,
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
        })
    }

    /// Initialize from the positions of a triangle mesh.
    pub fn from_mesh(mesh: &TriangleMesh, grid_width: Option<usize>) -> TensileResult<Self> {
        Self::new(&mesh.positions(), grid_width)
    }

    /// Seed initial velocities. `velocities` must match the vertex count.
    pub fn with_initial_velocities(mut self, velocities: &[Vec3]) -> TensileResult<Self> {
        if velocities.len() != self.vertex_count {
            return Err(TensileError::InvalidConfiguration(format!(
                "Velocity count ({}) != vertex count ({})",
                velocities.len(),
                self.vertex_count
            )));
        }
        for (i, v) in velocities.iter().enumerate() {
            self.vel_x[i] = v.x;
            self.vel_y[i] = v.y;
            self.vel_z[i] = v.z;
        }
        Ok(self)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::new(self.vel_x[i], self.vel_y[i], self.vel_z[i])
    }

    #[inline]
    pub fn rest_position(&self, i: usize) -> Vec3 {
        Vec3::new(self.rest_x[i], self.rest_y[i], self.rest_z[i])
    }

    /// Displaced positions as `(x, y, z)` channels, for zero-copy publishing.
    #[inline]
    pub fn position_channels(&self) -> (&[f32], &[f32], &[f32]) {
        (&self.pos_x, &self.pos_y, &self.pos_z)
    }

    /// Displaced positions as an AoS vertex buffer, index-aligned with the input.
    pub fn current_positions(&self) -> Vec<Vec3> {
        (0..self.vertex_count).map(|i| self.position(i)).collect()
    }

    /// Velocities as an AoS buffer.
    pub fn velocities(&self) -> Vec<Vec3> {
        (0..self.vertex_count).map(|i| self.velocity(i)).collect()
    }

    /// Copy displaced positions into the pre-step buffer.
    pub(crate) fn save_previous(&mut self) {
        self.prev_x.copy_from_slice(&self.pos_x);
        self.prev_y.copy_from_slice(&self.pos_y);
        self.prev_z.copy_from_slice(&self.pos_z);
    }

    /// Unit-mass kinetic energy: Σ |v_i|².
    pub fn kinetic_energy(&self) -> f64 {
        let mut energy = 0.0f64;
        for i in 0..self.vertex_count {
            let vx = self.vel_x[i] as f64;
            let vy = self.vel_y[i] as f64;
            let vz = self.vel_z[i] as f64;
            energy += vx * vx + vy * vy + vz * vz;
        }
        energy
    }

    /// Largest distance of any vertex from its rest position.
    pub fn max_displacement(&self) -> f32 {
        (0..self.vertex_count)
            .map(|i| self.position(i).distance(self.rest_position(i)))
            .fold(0.0f32, f32::max)
    }

    /// False once any position or velocity has gone NaN or infinite.
    pub fn is_finite(&self) -> bool {
        (0..self.vertex_count)
            .all(|i| self.position(i).is_finite() && self.velocity(i).is_finite())
    }
}
