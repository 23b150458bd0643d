use crate::core::Vec2;

use super::Surface;

/// Floats per circle: x, y, radius, color bits
pub const CIRCLE_STRIDE: usize = 4;

/// Flat circle list for canvas-drawing hosts.
///
/// Colors are stored with `f32::from_bits` so the host reads them back
/// losslessly through a `Uint32Array` view of the same memory.
#[derive(Default)]
pub struct CircleBatch {
    background: u32,
    data: Vec<f32>,
}

impl CircleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn count(&self) -> usize {
        self.data.len() / CIRCLE_STRIDE
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    /// `(center, radius, color)` of circle `idx`
    pub fn get(&self, idx: usize) -> Option<(Vec2, f32, u32)> {
        let base = idx * CIRCLE_STRIDE;
        let c = self.data.get(base..base + CIRCLE_STRIDE)?;
        Some((Vec2::new(c[0], c[1]), c[2], c[3].to_bits()))
    }
}

impl Surface for CircleBatch {
    fn clear(&mut self, color: u32) {
        self.background = color;
        self.data.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32) {
        self.data.extend_from_slice(&[center.x, center.y, radius, f32::from_bits(color)]);
    }
}
