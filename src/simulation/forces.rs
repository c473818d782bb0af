//! Force contributors for the spring chain
//!
//! The force models themselves are pure functions ([`drag_force`],
//! [`spring_force`]) returning a force value. [`ForceSet`] wraps them in
//! [`ForceGenerator`] terms that accumulate into the particles of a [`Chain`].

use crate::simulation::states::{unit_or_zero, Chain, NVec2};

/// Quadratic drag: opposes `v` with magnitude `k * |v|^2`.
/// Zero velocity gives zero force.
pub fn drag_force(v: NVec2, k: f64) -> NVec2 {
    let speed2 = v.norm_squared();
    if speed2 > 0.0 {
        -unit_or_zero(v) * (k * speed2)
    } else {
        NVec2::zeros()
    }
}

/// Hookean spring between `x` and `anchor`.
///
/// Positive displacement (stretched) pulls `x` toward `anchor`, negative
/// (compressed) pushes it away. Coincident points give zero force.
pub fn spring_force(x: NVec2, anchor: NVec2, rest_length: f64, k: f64) -> NVec2 {
    let d = x - anchor;
    let displacement = d.norm() - rest_length;
    unit_or_zero(d) * (-k * displacement)
}

/// Collection of force terms (drag, gravity, springs).
/// Each term implements [`ForceGenerator`] and adds its contribution into
/// the particles' accumulators
pub struct ForceSet {
    terms: Vec<Box<dyn ForceGenerator + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term; terms run in the order they are added
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceGenerator + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Clear every accumulator, then let each term add its forces.
    /// No term moves a particle, so every term reads pre-step positions.
    pub fn accumulate_forces(&self, chain: &mut Chain) {
        chain.clear_forces();
        for term in &self.terms {
            term.apply(chain);
        }
    }
}

/// A force source acting on a [`Chain`]
pub trait ForceGenerator {
    fn apply(&self, chain: &mut Chain);
}

/// Quadratic air drag on every particle
pub struct Drag {
    pub k: f64,
}

impl ForceGenerator for Drag {
    fn apply(&self, chain: &mut Chain) {
        for p in chain.particles_mut() {
            let f = drag_force(p.v, self.k);
            p.add_force(f);
        }
    }
}

/// Constant gravitational acceleration, applied as `m * g`
pub struct UniformGravity {
    pub g: NVec2,
}

impl ForceGenerator for UniformGravity {
    fn apply(&self, chain: &mut Chain) {
        for p in chain.particles_mut() {
            let f = self.g * p.m;
            p.add_force(f);
        }
    }
}

/// Springs along the chain: anchor-to-first, then between neighbours.
/// The anchor takes no reaction; interior links push and pull both ends
/// with equal and opposite forces.
pub struct ChainSprings {
    pub rest_length: f64,
    pub k: f64,
}

impl ChainSprings {
    /// Force on particle `i` from its link to the predecessor
    pub fn link_force(&self, chain: &Chain, i: usize) -> Option<NVec2> {
        let x = chain.get(i)?.x;
        let anchor = chain.predecessor_position(i)?;
        Some(spring_force(x, anchor, self.rest_length, self.k))
    }
}

impl ForceGenerator for ChainSprings {
    fn apply(&self, chain: &mut Chain) {
        // Evaluate every link before touching an accumulator
        let links: Vec<NVec2> = (0..chain.len())
            .filter_map(|i| self.link_force(chain, i))
            .collect();

        let particles = chain.particles_mut();
        for (i, f) in links.into_iter().enumerate() {
            particles[i].add_force(f);
            if i > 0 {
                particles[i - 1].add_force(-f);
            }
        }
    }
}
