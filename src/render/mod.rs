//! Drawing targets
//!
//! The world only knows how to put filled circles on a `Surface`. Two
//! surfaces ship with the engine: a CPU framebuffer the host can blit as
//! `ImageData`, and a flat circle list for hosts that draw with canvas calls.

mod circles;
mod framebuffer;

pub use circles::{CircleBatch, CIRCLE_STRIDE};
pub use framebuffer::FrameBuffer;

use crate::core::Vec2;

/// Anything bubbles can be drawn on
pub trait Surface {
    /// Fill the whole surface with `color` (ABGR)
    fn clear(&mut self, color: u32);

    /// Fill a disc
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32);
}
