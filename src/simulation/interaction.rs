//! Pointer interaction: pull back from the free end, release to fling it.
//!
//! Two states. A button press starts `Pressing` at the pointer; while
//! pressing the pointer position is tracked for the feedback line. On
//! release the free end's velocity is overwritten with an impulse pointing
//! from the pointer toward the free end, scaled by their distance.

use tracing::debug;

use crate::simulation::states::{Chain, NVec2};

/// Per-frame input reported by the presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub dt: f64,                 // seconds since the previous frame
    pub pointer: Option<NVec2>,  // pointer position, if inside the surface
    pub pressed: bool,           // button went down this frame
    pub released: bool,          // button went up this frame
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Pressing { pointer: NVec2 },
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub state: PointerState,
    pub impulse_scale: f64,
}

/// Velocity given to a particle at `target` when released from `pointer`.
/// `None` when the two coincide and no direction exists.
pub fn impulse_velocity(target: NVec2, pointer: NVec2, scale: f64) -> Option<NVec2> {
    let d = target - pointer;
    let dir = d.try_normalize(0.0)?;
    Some(dir * (d.norm() * scale))
}

impl Interaction {
    pub fn new(impulse_scale: f64) -> Self {
        Self {
            state: PointerState::Idle,
            impulse_scale,
        }
    }

    /// Pointer position while pressing
    pub fn pointer(&self) -> Option<NVec2> {
        match self.state {
            PointerState::Pressing { pointer } => Some(pointer),
            PointerState::Idle => None,
        }
    }

    pub fn is_pressing(&self) -> bool {
        matches!(self.state, PointerState::Pressing { .. })
    }

    /// Apply one frame of input. A press and release in the same frame
    /// fire immediately. Returns the velocity assigned to the free end.
    pub fn update(&mut self, input: &FrameInput, chain: &mut Chain) -> Option<NVec2> {
        if input.pressed && !self.is_pressing() {
            if let Some(pointer) = input.pointer {
                self.state = PointerState::Pressing { pointer };
            }
        }

        if let (PointerState::Pressing { pointer }, Some(current)) = (&mut self.state, input.pointer) {
            *pointer = current;
        }

        if input.released {
            if let PointerState::Pressing { pointer } = self.state {
                self.state = PointerState::Idle;
                return self.release(pointer, chain);
            }
        }

        None
    }

    /// A release exactly on the free end has no direction; the free end
    /// keeps its velocity instead of being zeroed.
    fn release(&self, pointer: NVec2, chain: &mut Chain) -> Option<NVec2> {
        let free_end = chain.free_end_mut();
        match impulse_velocity(free_end.x, pointer, self.impulse_scale) {
            Some(v) => {
                free_end.v = v;
                debug!(?pointer, velocity = ?v, "impulse applied to free end");
                Some(v)
            }
            None => {
                debug!(?pointer, "release on top of the free end, no impulse");
                None
            }
        }
    }
}
