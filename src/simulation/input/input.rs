//! Per-frame input
//!
//! The host collects window events between frames and hands them over in
//! one batch. Events are applied in arrival order before the world steps.

use crate::core::Vec2;

use super::WorldCore;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Stop the simulation loop
    Quit,
    /// Pointer moved; the position persists until the next move
    PointerMove(Vec2),
    /// Pointer pressed; spawns a bubble at exactly this position
    PointerClick(Vec2),
}

/// Everything the host gathered for one frame
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    /// Held debug key: skip the physics step, only refresh contacts
    pub freeze: bool,
}

impl FrameInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events, freeze: false }
    }

    pub fn frozen(events: Vec<InputEvent>) -> Self {
        Self { events, freeze: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub(super) fn run_frame(world: &mut WorldCore, input: &FrameInput) -> FrameOutcome {
    for event in input.events.iter() {
        match *event {
            InputEvent::Quit => return FrameOutcome::Quit,
            InputEvent::PointerMove(p) => world.set_pointer(p.x, p.y),
            InputEvent::PointerClick(p) => {
                world.add_bubble(p.x, p.y);
            }
        }
    }

    if input.freeze {
        world.inspect_contacts();
    } else {
        world.step();
    }
    FrameOutcome::Continue
}
