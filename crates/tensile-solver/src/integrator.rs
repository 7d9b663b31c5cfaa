//! Explicit mass-spring integration step.
//!
//! One call advances every vertex by `dt`:
//! 1. **Gravity** — `v += g · dt`
//! 2. **Springs** — `v += Σ F(i, j) · dt` over the present grid neighbors `j`
//! 3. **Damping** — `v *= damping`
//! 4. **Position** — `p += v · dt`
//!
//! Every spring reads the positions from *before* the step, so the result
//! does not depend on the order vertices are visited in. The sequential and
//! parallel passes share one per-vertex kernel and produce identical bits.
//!
//! Masses are unit: a force sum is applied directly as acceleration.

use rayon::prelude::*;
use tensile_math::{try_spring_force, Vec3};
use tensile_mesh::GridTopology;

use crate::config::SolverConfig;
use crate::state::SurfaceState;

/// Per-step integration parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    /// Timestep (seconds). Expected small and positive; not checked.
    pub dt: f32,
    /// Gravitational acceleration (m/s²), applied to every vertex.
    pub gravity: Vec3,
    /// Hooke stiffness `k` shared by every spring.
    pub spring_constant: f32,
    /// Rest length `L0` shared by orthogonal and diagonal springs alike.
    pub rest_length: f32,
    /// Per-step velocity multiplier. Values ≥ 1 add energy; not checked.
    pub damping: f32,
}

impl StepParams {
    /// Snapshot of `config` for one step of size `dt`.
    pub fn from_config(config: &SolverConfig, dt: f32) -> Self {
        Self {
            dt,
            gravity: config.gravity_vec(),
            spring_constant: config.spring_constant,
            rest_length: config.rest_length,
            damping: config.damping,
        }
    }
}

/// Read-only view over the pre-step position channels.
#[derive(Clone, Copy)]
struct PositionView<'a> {
    x: &'a [f32],
    y: &'a [f32],
    z: &'a [f32],
}

impl PositionView<'_> {
    #[inline]
    fn get(&self, i: usize) -> Vec3 {
        Vec3::new(self.x[i], self.y[i], self.z[i])
    }
}

/// New velocity of vertex `i` and the number of its springs whose
/// endpoints coincided (those contribute zero force).
#[inline]
fn advance_velocity(
    i: usize,
    velocity: Vec3,
    prev: PositionView<'_>,
    topology: &GridTopology,
    params: &StepParams,
) -> (Vec3, u32) {
    let mut v = velocity + params.gravity * params.dt;

    let here = prev.get(i);
    let mut force = Vec3::ZERO;
    let mut degenerate = 0u32;
    for j in topology.neighbors(i) {
        match try_spring_force(here, prev.get(j), params.rest_length, params.spring_constant) {
            Some(f) => force += f,
            None => degenerate += 1,
        }
    }
    v += force * params.dt;

    (v * params.damping, degenerate)
}

/// Advance `state` by one step on the calling thread.
///
/// Returns the number of degenerate (zero-length) spring evaluations.
pub fn step(state: &mut SurfaceState, params: &StepParams) -> u32 {
    state.save_previous();

    let SurfaceState {
        vertex_count,
        topology,
        prev_x,
        prev_y,
        prev_z,
        pos_x,
        pos_y,
        pos_z,
        vel_x,
        vel_y,
        vel_z,
        ..
    } = state;
    let prev = PositionView {
        x: &prev_x[..],
        y: &prev_y[..],
        z: &prev_z[..],
    };

    let mut degenerate = 0u32;
    for i in 0..*vertex_count {
        let velocity = Vec3::new(vel_x[i], vel_y[i], vel_z[i]);
        let (v, d) = advance_velocity(i, velocity, prev, topology, params);
        degenerate += d;

        vel_x[i] = v.x;
        vel_y[i] = v.y;
        vel_z[i] = v.z;
        pos_x[i] += v.x * params.dt;
        pos_y[i] += v.y * params.dt;
        pos_z[i] += v.z * params.dt;
    }
    degenerate
}

/// Advance `state` by one step with the per-vertex pass spread over rayon.
///
/// Writes only touch vertex `i`'s own position and velocity while all
/// spring reads go to the pre-step buffer, so there are no cross-vertex
/// hazards.
pub fn step_parallel(state: &mut SurfaceState, params: &StepParams) -> u32 {
    state.save_previous();

    let SurfaceState {
        topology,
        prev_x,
        prev_y,
        prev_z,
        pos_x,
        pos_y,
        pos_z,
        vel_x,
        vel_y,
        vel_z,
        ..
    } = state;
    let prev = PositionView {
        x: &prev_x[..],
        y: &prev_y[..],
        z: &prev_z[..],
    };
    let topology = *topology;
    let dt = params.dt;

    (
        &mut pos_x[..],
        &mut pos_y[..],
        &mut pos_z[..],
        &mut vel_x[..],
        &mut vel_y[..],
        &mut vel_z[..],
    )
        .into_par_iter()
        .enumerate()
        .map(|(i, (px, py, pz, vx, vy, vz))| {
            let (v, d) = advance_velocity(i, Vec3::new(*vx, *vy, *vz), prev, &topology, params);
            *vx = v.x;
            *vy = v.y;
            *vz = v.z;
            *px += v.x * dt;
            *py += v.y * dt;
            *pz += v.z * dt;
            d
        })
        .sum()
}
