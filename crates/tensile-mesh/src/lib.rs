//! # tensile-mesh
//!
//! Grid topology and surface geometry for the mass-spring engine.
//!
//! ## Key Types
//!
//! - [`GridTopology`] — Flat-index ↔ (column, row) mapping and the
//!   eight-neighbor spring stencil. Pure arithmetic, no storage.
//! - [`TriangleMesh`] — SoA surface used by the reference publish sink
//!   (positions, normals, indices).
//! - Procedural generators for flat rest lattices.

pub mod generators;
pub mod grid;
pub mod mesh;
pub mod normals;

pub use grid::GridTopology;
pub use mesh::TriangleMesh;
