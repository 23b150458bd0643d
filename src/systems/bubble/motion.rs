use crate::core::easing::chrange;
use crate::core::Vec2;

use super::Bubble;

impl Bubble {
    /// Clamp speed to `max_velocity`, then advance by one frame of velocity.
    pub fn move_step(&mut self, max_velocity: f32) {
        if self.velocity.length() > max_velocity {
            self.velocity = self.velocity.scale_to_length(max_velocity);
        }
        self.position += self.velocity;
    }

    /// Push the bubble away from the pointer.
    ///
    /// Strength is 1 on top of the pointer and falls off quadratically to 0 at
    /// `repel_radius`. Same push for every size; no push when the pointer sits
    /// exactly on the center.
    pub fn repel_from(&mut self, pointer: Vec2, repel_radius: f32) {
        let to_pointer = pointer - self.position;
        let distance = to_pointer.length();
        if distance > 0.0 && distance < repel_radius {
            let strength = chrange(distance, (0.0, repel_radius), (1.0, 0.0), 2);
            self.velocity -= (to_pointer / distance) * strength;
        }
    }
}
