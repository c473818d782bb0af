//! Core state types for the spring chain.
//!
//! - `Particle` owns its kinematic state and a per-step force accumulator
//! - `Chain` is the ordered particle sequence hanging from a fixed anchor
//!
//! Coordinates are screen pixels: origin at the top-left, +y pointing down.

use nalgebra::Vector2;

use crate::configuration::config::MassCoupling;

pub type NVec2 = Vector2<f64>;

/// Unit vector along `v`, or the zero vector when `v` has no length
pub fn unit_or_zero(v: NVec2) -> NVec2 {
    v.try_normalize(0.0).unwrap_or_else(NVec2::zeros)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec2,      // position
    pub v: NVec2,      // velocity
    pub a: NVec2,      // acceleration from the last integration
    pub forces: NVec2, // force accumulator for the current step
    pub m: f64,        // mass
    pub radius: f64,   // draw radius, no physical effect
}

impl Particle {
    /// Particle at rest with an empty accumulator
    pub fn at_rest(x: NVec2, m: f64, radius: f64) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            forces: NVec2::zeros(),
            m,
            radius,
        }
    }

    pub fn add_force(&mut self, force: NVec2) {
        self.forces += force;
    }

    pub fn clear_forces(&mut self) {
        self.forces = NVec2::zeros();
    }

    /// Semi-implicit Euler step using the reference `a = F * m` coupling
    pub fn integrate(&mut self, dt: f64) {
        self.integrate_with(dt, MassCoupling::Multiply);
    }

    /// Semi-implicit Euler step: velocity first, then position from the
    /// updated velocity. The accumulator is left untouched; it is cleared
    /// at the start of the next step.
    pub fn integrate_with(&mut self, dt: f64, coupling: MassCoupling) {
        self.a = match coupling {
            MassCoupling::Multiply => self.forces * self.m,
            MassCoupling::Divide => self.forces / self.m,
        };
        self.v += self.a * dt;
        self.x += self.v * dt;
    }
}

/// Ordered chain: anchor -> particles[0] -> particles[1] -> ... -> free end.
///
/// A chain always holds at least one particle, so the free end exists.
#[derive(Debug, Clone)]
pub struct Chain {
    anchor: NVec2,
    particles: Vec<Particle>,
}

impl Chain {
    /// Returns `None` for an empty particle list
    pub fn new(anchor: NVec2, particles: Vec<Particle>) -> Option<Self> {
        if particles.is_empty() {
            return None;
        }
        Some(Self { anchor, particles })
    }

    /// `count` particles at rest, evenly spaced straight below the anchor.
    /// Particle `i` starts at `anchor + (0, i * spacing)`, so the first one
    /// sits on the anchor itself. Returns `None` when `count` is zero.
    pub fn hanging(anchor: NVec2, count: usize, spacing: f64, m: f64, radius: f64) -> Option<Self> {
        let particles = (0..count)
            .map(|i| Particle::at_rest(anchor + NVec2::new(0.0, i as f64 * spacing), m, radius))
            .collect();
        Self::new(anchor, particles)
    }

    pub fn anchor(&self) -> NVec2 {
        self.anchor
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn get(&self, i: usize) -> Option<&Particle> {
        self.particles.get(i)
    }

    /// Position the spring of particle `i` is attached to: the anchor for
    /// the first particle, otherwise the previous particle. `None` past the
    /// free end.
    pub fn predecessor_position(&self, i: usize) -> Option<NVec2> {
        match i {
            _ if i >= self.particles.len() => None,
            0 => Some(self.anchor),
            _ => Some(self.particles[i - 1].x),
        }
    }

    pub fn free_end(&self) -> &Particle {
        let last = self.particles.len() - 1;
        &self.particles[last]
    }

    pub fn free_end_mut(&mut self) -> &mut Particle {
        let last = self.particles.len() - 1;
        &mut self.particles[last]
    }

    pub fn clear_forces(&mut self) {
        for p in self.particles.iter_mut() {
            p.clear_forces();
        }
    }
}
