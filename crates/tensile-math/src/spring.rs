//! Hooke's-law spring force between two connected point masses.
//!
//! The force is the contribution *to vertex A only*. Callers sum one
//! contribution per neighbor and never apply the reaction on B, so each
//! vertex independently accumulates its own pulls.

use glam::Vec3;

/// Force exerted on `pos_a` by a spring connecting it to `pos_b`.
///
/// `F = -k · (|a - b| - L0) · (a - b) / |a - b|`
///
/// A stretched spring (`|a - b| > L0`) pulls A toward B, a compressed one
/// pushes A away from B, and a spring at rest length contributes nothing.
///
/// Returns `None` when the endpoints coincide, since the spring direction
/// is undefined there.
#[inline]
pub fn try_spring_force(
    pos_a: Vec3,
    pos_b: Vec3,
    rest_length: f32,
    spring_constant: f32,
) -> Option<Vec3> {
    let offset = pos_a - pos_b;
    let dist = offset.length();
    if dist == 0.0 {
        return None;
    }

    let magnitude = -spring_constant * (dist - rest_length);
    Some(offset * (magnitude / dist))
}

/// Like [`try_spring_force`], but coincident endpoints yield a zero force.
///
/// # Example
/// ```
/// use tensile_math::{spring_force, Vec3};
/// let f = spring_force(Vec3::ZERO, Vec3::new(0.2, 0.0, 0.0), 0.1, 50.0);
/// assert!(f.x > 0.0); // stretched: A is pulled toward B
/// ```
#[inline]
pub fn spring_force(pos_a: Vec3, pos_b: Vec3, rest_length: f32, spring_constant: f32) -> Vec3 {
    try_spring_force(pos_a, pos_b, rest_length, spring_constant).unwrap_or(Vec3::ZERO)
}
