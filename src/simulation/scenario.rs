//! Build a fully-initialized spring-chain scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - chain state (`Chain`, all particles at rest)
//! - active force set (`ForceSet`)
//! - pointer interaction state (`Interaction`)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! viewer, or stepped directly in headless runs and tests.

use bevy::prelude::Resource;
use tracing::{info, warn};

use crate::configuration::config::ScenarioConfig;
use crate::error::{ConfigError, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{ChainSprings, Drag, ForceSet, UniformGravity};
use crate::simulation::integrator::symplectic_euler_step;
use crate::simulation::interaction::{FrameInput, Interaction};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Chain, NVec2};

/// Circle to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: NVec2,
    pub radius: f64,
}

/// Line segment to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: NVec2,
    pub end: NVec2,
}

/// Everything the presentation surface needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub circles: Vec<Circle>,      // anchor first, then particles in chain order
    pub segments: Vec<Segment>,    // anchor -> p0 -> p1 -> ... -> free end
    pub feedback: Option<Segment>, // free end -> pointer while pressing
}

/// Bevy resource representing a fully-initialized spring-chain scenario
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub chain: Chain,
    pub forces: ForceSet,
    pub interaction: Interaction,
    pub anchor_radius: f64,
    pub t: f64, // simulated time
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let parameters = Parameters::from_config(cfg);
        let engine = Engine::from_config(&cfg.engine);

        // Chain: particles hang straight down from the anchor, one rest length apart
        let [ax, ay] = cfg.anchor();
        let chain = Chain::hanging(
            NVec2::new(ax, ay),
            cfg.chain.count,
            parameters.rest_length,
            cfg.chain.mass,
            cfg.chain.radius,
        )
        .ok_or_else(|| ConfigError::invalid("chain.count", "a chain needs at least one particle"))?;

        // Forces in step order: drag, gravity, then the springs
        let forces = ForceSet::new()
            .with(Drag { k: parameters.drag })
            .with(UniformGravity { g: parameters.gravity })
            .with(ChainSprings {
                rest_length: parameters.rest_length,
                k: parameters.stiffness,
            });

        info!(
            particles = chain.len(),
            coupling = ?engine.mass_coupling,
            "scenario built"
        );

        Ok(Self {
            interaction: Interaction::new(parameters.impulse_scale),
            engine,
            parameters,
            chain,
            forces,
            anchor_radius: cfg.chain.anchor_radius,
            t: 0.0,
        })
    }

    /// Run one frame: interaction first, then the physics step.
    /// A frame with a negative or non-finite `dt` is rejected untouched.
    pub fn advance(&mut self, input: &FrameInput) -> Result<(), SimError> {
        if !input.dt.is_finite() {
            warn!(dt = input.dt, "frame rejected");
            return Err(SimError::NonFiniteTimeStep(input.dt));
        }
        if input.dt < 0.0 {
            warn!(dt = input.dt, "frame rejected");
            return Err(SimError::NegativeTimeStep(input.dt));
        }

        self.interaction.update(input, &mut self.chain);

        let dt = self.engine.effective_dt(input.dt);
        symplectic_euler_step(&mut self.chain, &self.forces, &self.engine, dt);
        self.t += dt;
        Ok(())
    }

    /// Shapes to draw for the current state
    pub fn frame(&self) -> Frame {
        let anchor = self.chain.anchor();
        let particles = self.chain.particles();

        let circles = std::iter::once(Circle {
            center: anchor,
            radius: self.anchor_radius,
        })
        .chain(particles.iter().map(|p| Circle {
            center: p.x,
            radius: p.radius,
        }))
        .collect();

        let points: Vec<NVec2> = std::iter::once(anchor)
            .chain(particles.iter().map(|p| p.x))
            .collect();
        let segments = points
            .windows(2)
            .map(|w| Segment { start: w[0], end: w[1] })
            .collect();

        let feedback = self.interaction.pointer().map(|pointer| Segment {
            start: self.chain.free_end().x,
            end: pointer,
        });

        Frame {
            circles,
            segments,
            feedback,
        }
    }
}
