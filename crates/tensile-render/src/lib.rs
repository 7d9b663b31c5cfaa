//! # tensile-render
//!
//! The publish side of the simulation loop.
//!
//! After every step the solver's positions are committed, one way, to a
//! [`SurfaceSink`]. Sinks own whatever derived data they need (normals,
//! GPU buffers, files); the numeric core never sees it.
//!
//! - [`HeadlessSurface`] — counts frames (benchmarks, CI)
//! - [`MeshSurface`] — writes into a [`TriangleMesh`](tensile_mesh::TriangleMesh)
//!   and recomputes vertex normals
//! - [`JsonFrameExporter`] — records an animation to JSON

pub mod json_exporter;
pub mod surface;

pub use json_exporter::JsonFrameExporter;
pub use surface::{HeadlessSurface, MeshSurface, SurfaceFrame, SurfaceSink};
