//! Procedural rest lattices for scenarios and testing.
//!
//! Vertices are laid out row-major so that vertex `i` lands on column
//! `i % cols`, row `i / cols` — the same mapping
//! [`GridTopology`](crate::grid::GridTopology) uses.

use tensile_math::Vec3;

use crate::mesh::TriangleMesh;

/// Generates a flat `cols × rows` vertex lattice in the XZ plane at height `y`.
///
/// Column index grows along +X and row index along +Z, both starting at the
/// origin, with `spacing` between orthogonal neighbors.
///
/// # Example
/// ```
/// use tensile_mesh::generators::flat_lattice;
/// let verts = flat_lattice(3, 3, 0.1, 0.0);
/// assert_eq!(verts.len(), 9);
/// assert!((verts[4].x - 0.1).abs() < 1e-6); // center column
/// ```
pub fn flat_lattice(cols: usize, rows: usize, spacing: f32, y: f32) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(cols * rows);
    for j in 0..rows {
        for i in 0..cols {
            positions.push(Vec3::new(i as f32 * spacing, y, j as f32 * spacing));
        }
    }
    positions
}

/// Triangle indices for a row-major `cols × rows` vertex lattice.
///
/// Two triangles per cell, wound so that a lattice in the XZ plane
/// faces +Y.
pub fn lattice_indices(cols: usize, rows: usize) -> Vec<u32> {
    if cols < 2 || rows < 2 {
        return Vec::new();
    }
    let mut indices = Vec::with_capacity((cols - 1) * (rows - 1) * 6);
    for j in 0..rows - 1 {
        for i in 0..cols - 1 {
            let top_left = (j * cols + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + cols as u32;
            let bot_right = bot_left + 1;

            indices.extend_from_slice(&[top_left, bot_left, top_right]);
            indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }
    indices
}

/// A flat lattice as a renderable triangle mesh with +Y normals.
pub fn lattice_mesh(cols: usize, rows: usize, spacing: f32) -> TriangleMesh {
    let positions = flat_lattice(cols, rows, spacing, 0.0);
    let indices = lattice_indices(cols, rows);

    let mut mesh = TriangleMesh::with_capacity(positions.len(), indices.len() / 3);
    for p in &positions {
        mesh.pos_x.push(p.x);
        mesh.pos_y.push(p.y);
        mesh.pos_z.push(p.z);
        mesh.normal_x.push(0.0);
        mesh.normal_y.push(1.0);
        mesh.normal_z.push(0.0);
    }
    mesh.indices = indices;
    mesh
}
