pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Particle, Chain, NVec2, unit_or_zero};
pub use simulation::forces::{drag_force, spring_force, ForceGenerator, ForceSet, Drag, UniformGravity, ChainSprings};
pub use simulation::integrator::symplectic_euler_step;
pub use simulation::interaction::{FrameInput, Interaction, PointerState, impulse_velocity};
pub use simulation::scenario::{Scenario, Frame, Circle, Segment};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;

pub use configuration::config::{ScenarioConfig, EngineConfig, ChainConfig, ForcesConfig, InteractionConfig, WindowConfig, MassCoupling};

pub use error::{ConfigError, SimError};

pub use visualization::chain_vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
