//! Bubble-bubble contacts
//!
//! Detection and resolution are split so a frame can collect every overlap
//! first and only then change velocities. Resolving pair A must not change
//! what pair B sees in the same frame.

mod detection;
mod resolution;

pub use detection::{detect, detect_all};
pub use resolution::resolve_all;

use crate::core::Vec2;

/// One overlap between two bubbles, valid for the frame it was detected in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Id of the bubble the center line starts from
    pub first: u32,
    /// Id of the bubble the center line points to
    pub second: u32,
    /// Midpoint between the two surface points on the center line
    pub center: Vec2,
    /// Unit tangent: the center line rotated by +90 degrees
    pub axis: Vec2,
}

impl Contact {
    /// Unit vector from `first` toward `second`
    #[inline]
    pub fn center_line(&self) -> Vec2 {
        self.axis.rotate_neg_90()
    }
}
