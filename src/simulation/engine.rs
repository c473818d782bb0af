//! High-level runtime engine settings
//!
//! Selects the force/mass coupling and the optional per-frame `dt` clamp
//! used when running a `Scenario`

use crate::configuration::config::{EngineConfig, MassCoupling};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub mass_coupling: MassCoupling, // multiply (reference) or divide (Newtonian)
    pub max_dt: Option<f64>,         // frames longer than this are shortened
}

impl Engine {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self {
            mass_coupling: cfg.mass_coupling,
            max_dt: cfg.max_dt,
        }
    }

    /// Frame time actually simulated
    pub fn effective_dt(&self, dt: f64) -> f64 {
        match self.max_dt {
            Some(max) => dt.min(max),
            None => dt,
        }
    }
}
