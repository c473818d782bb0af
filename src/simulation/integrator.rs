//! Time integration for the spring chain
//!
//! One explicit step per frame: all forces are accumulated from the
//! current positions, then every particle takes a semi-implicit Euler step.

use tracing::trace;

use super::engine::Engine;
use super::forces::ForceSet;
use super::states::Chain;

/// Advance the chain by `dt` seconds.
///
/// 1. clear all accumulators
/// 2. drag and gravity on every particle
/// 3. anchor spring on the first particle
/// 4. neighbour springs, equal and opposite
/// 5. integrate every particle
///
/// Steps 1-4 are whatever `forces` registers, in order. `dt` must be
/// non-negative; `Scenario::advance` checks this before calling.
pub fn symplectic_euler_step(chain: &mut Chain, forces: &ForceSet, engine: &Engine, dt: f64) {
    forces.accumulate_forces(chain);

    for p in chain.particles_mut() {
        p.integrate_with(dt, engine.mass_coupling);
    }

    trace!(dt, free_end = ?chain.free_end().x, "chain step");
}
