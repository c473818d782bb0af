//! Configuration types for loading spring-chain scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`WindowConfig`]      – size and title of the presentation window
//! - [`EngineConfig`]      – mass coupling convention and optional `dt` clamp
//! - [`ChainConfig`]       – particle count, mass, radius and spring constants
//! - [`ForcesConfig`]      – drag coefficient and gravity
//! - [`InteractionConfig`] – impulse scale for the pointer interaction
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! Every section is optional; missing sections and fields fall back to the
//! reference constants (five particles of mass 2 hanging 50 px apart from an
//! anchor at the top centre of an 840x480 window).
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   width: 840
//!   height: 480
//!   title: "Spring Force"
//!
//! engine:
//!   mass_coupling: "multiply"   # or "divide"
//!   max_dt: 0.05                # optional per-frame clamp
//!
//! chain:
//!   count: 5
//!   mass: 2.0
//!   radius: 10.0
//!   rest_length: 50.0
//!   stiffness: 100.0
//!   anchor: [420.0, 20.0]       # optional, defaults to top centre
//!   anchor_radius: 5.0
//!
//! forces:
//!   drag: 0.001
//!   gravity: 9.8
//!   pixels_per_meter: 50.0
//!
//! interaction:
//!   impulse_scale: 20.0
//! ```
//!
//! The scenario builder maps this configuration into the runtime types in
//! [`crate::simulation`] after [`ScenarioConfig::validate`] has accepted it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// How accumulated force turns into acceleration.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassCoupling {
    /// `a = F * m`. Matches the reference behaviour of the original demo
    #[default]
    #[serde(rename = "multiply")]
    Multiply,

    /// `a = F / m`. Newtonian
    #[serde(rename = "divide")]
    Divide,
}

/// Presentation window settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 840.0,
            height: 480.0,
            title: "Spring Force".to_string(),
        }
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub mass_coupling: MassCoupling, // acceleration = force * mass or force / mass
    pub max_dt: Option<f64>,         // upper bound applied to each frame's dt
}

/// Chain layout and spring constants
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ChainConfig {
    pub count: usize,             // number of particles, index 0 hangs from the anchor
    pub mass: f64,                // mass of every particle
    pub radius: f64,              // draw radius of every particle
    pub rest_length: f64,         // spring length with zero force
    pub stiffness: f64,           // spring constant k
    pub anchor: Option<[f64; 2]>, // fixed attachment point, top centre when absent
    pub anchor_radius: f64,       // draw radius of the anchor
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            count: 5,
            mass: 2.0,
            radius: 10.0,
            rest_length: 50.0,
            stiffness: 100.0,
            anchor: None,
            anchor_radius: 5.0,
        }
    }
}

/// Environmental forces
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ForcesConfig {
    pub drag: f64,             // quadratic drag coefficient
    pub gravity: f64,          // gravitational acceleration in m/s^2
    pub pixels_per_meter: f64, // world scale, gravity is applied in px/s^2
}

impl Default for ForcesConfig {
    fn default() -> Self {
        Self {
            drag: 0.001,
            gravity: 9.8,
            pixels_per_meter: 50.0,
        }
    }
}

/// Pointer interaction settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InteractionConfig {
    pub impulse_scale: f64, // velocity per pixel of pull distance
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self { impulse_scale: 20.0 }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub window: WindowConfig,
    pub engine: EngineConfig,
    pub chain: ChainConfig,
    pub forces: ForcesConfig,
    pub interaction: InteractionConfig,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a scenario file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Anchor position in screen coordinates
    pub fn anchor(&self) -> [f64; 2] {
        self.chain
            .anchor
            .unwrap_or([self.window.width / 2.0, 20.0])
    }

    /// Reject values that would make the simulation produce NaN or panic
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::invalid("window", "width and height must be positive"));
        }

        let chain = &self.chain;
        if chain.count < 1 {
            return Err(ConfigError::invalid("chain.count", "a chain needs at least one particle"));
        }
        if !(chain.mass.is_finite() && chain.mass > 0.0) {
            return Err(ConfigError::invalid("chain.mass", format!("must be positive, got {}", chain.mass)));
        }
        non_negative("chain.radius", chain.radius)?;
        non_negative("chain.rest_length", chain.rest_length)?;
        non_negative("chain.stiffness", chain.stiffness)?;
        non_negative("chain.anchor_radius", chain.anchor_radius)?;
        if let Some([x, y]) = chain.anchor {
            if !(x.is_finite() && y.is_finite()) {
                return Err(ConfigError::invalid("chain.anchor", "coordinates must be finite"));
            }
        }

        non_negative("forces.drag", self.forces.drag)?;
        finite("forces.gravity", self.forces.gravity)?;
        finite("forces.pixels_per_meter", self.forces.pixels_per_meter)?;
        finite("interaction.impulse_scale", self.interaction.impulse_scale)?;

        if let Some(max_dt) = self.engine.max_dt {
            if !(max_dt.is_finite() && max_dt > 0.0) {
                return Err(ConfigError::invalid("engine.max_dt", format!("must be positive, got {max_dt}")));
            }
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be finite, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::invalid(field, format!("must be non-negative, got {value}")));
    }
    Ok(())
}
