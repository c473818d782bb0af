//! Physical parameters for the simulation
//!
//! `Parameters` holds the startup constants the force set and the
//! interaction layer are built from:
//! - spring rest length and stiffness,
//! - drag coefficient and gravity (already scaled to px/s^2),
//! - impulse scale for pointer releases

use crate::configuration::config::ScenarioConfig;
use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub rest_length: f64,   // spring rest length
    pub stiffness: f64,     // spring constant
    pub drag: f64,          // drag coefficient
    pub gravity: NVec2,     // gravitational acceleration, screen space
    pub impulse_scale: f64, // velocity per pixel of pull
}

impl Parameters {
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        Self {
            rest_length: cfg.chain.rest_length,
            stiffness: cfg.chain.stiffness,
            drag: cfg.forces.drag,
            gravity: NVec2::new(0.0, cfg.forces.gravity * cfg.forces.pixels_per_meter),
            impulse_scale: cfg.interaction.impulse_scale,
        }
    }
}
