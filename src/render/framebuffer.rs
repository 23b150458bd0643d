use crate::core::Vec2;

use super::Surface;

/// Row-major ABGR pixel buffer
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pointer to pixel data (for JS `ImageData`)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, `None` outside the buffer
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.pixels.get((y as usize) * (self.width as usize) + x as usize).copied()
    }
}

impl Surface for FrameBuffer {
    fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32) {
        if radius <= 0.0 || self.pixels.is_empty() {
            return;
        }

        // (r + 0.5)^2 keeps the rim round at small radii
        let r_adj = radius + 0.5;
        let r2 = r_adj * r_adj;

        let w = self.width as i32;
        let h = self.height as i32;
        let x0 = ((center.x - r_adj).floor() as i32).max(0);
        let x1 = ((center.x + r_adj).ceil() as i32).min(w - 1);
        let y0 = ((center.y - r_adj).floor() as i32).max(0);
        let y1 = ((center.y + r_adj).ceil() as i32).min(h - 1);

        let row_width = self.width as usize;
        for y in y0..=y1 {
            let dy = y as f32 - center.y;
            let row = (y as usize) * row_width;
            for x in x0..=x1 {
                let dx = x as f32 - center.x;
                if dx * dx + dy * dy < r2 {
                    self.pixels[row + x as usize] = color;
                }
            }
        }
    }
}
