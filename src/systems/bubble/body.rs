use crate::core::Vec2;

/// Viewport rectangle a bubble bounces inside, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub height: f32,
}

impl Border {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A single bubble
#[derive(Clone, Debug)]
pub struct Bubble {
    /// Index in the owning world; stable since bubbles are never removed
    pub id: u32,
    /// Center, world coordinates
    pub position: Vec2,
    /// Pixels per frame
    pub velocity: Vec2,
    radius: f32,
    /// Packed ABGR
    pub color: u32,
    border: Border,
}

impl Bubble {
    /// Create a bubble with explicit state.
    ///
    /// Radii below 1 are raised to 1 so the mass stays positive.
    pub fn new(id: u32, position: Vec2, velocity: Vec2, radius: f32, color: u32, border: Border) -> Self {
        Self {
            id,
            position,
            velocity,
            radius: radius.max(1.0),
            color,
            border,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Area-proportional mass (2D disc)
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius * self.radius
    }

    #[inline]
    pub fn border(&self) -> Border {
        self.border
    }
}
