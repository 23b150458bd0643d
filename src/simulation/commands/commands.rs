use crate::core::Vec2;
use crate::systems::bubble::Bubble;

use super::WorldCore;

/// Append a bubble. It joins contact detection from the next pass on.
pub(super) fn add_bubble(world: &mut WorldCore, at: Option<Vec2>) -> u32 {
    let id = world.bubbles.len() as u32;
    let bubble = Bubble::spawn(&mut world.rng, &world.settings, world.border, id, at);
    world.bubbles.push(bubble);
    id
}

pub(super) fn set_pointer(world: &mut WorldCore, pointer: Option<Vec2>) {
    world.pointer = pointer;
}
