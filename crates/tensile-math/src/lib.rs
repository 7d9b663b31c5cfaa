//! # tensile-math
//!
//! Math primitives for the tensile mass-spring engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, etc.)
//! - The Hooke's-law spring force between two point masses

pub mod spring;

pub use spring::{spring_force, try_spring_force};

// Re-export glam types as the canonical math types for tensile.
pub use glam::{Vec2, Vec3, Vec3A};
