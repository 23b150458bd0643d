//! Packed colors
//!
//! Colors are stored as ABGR `u32` (little-endian RGBA bytes), the layout
//! canvas `ImageData` expects when the pixel buffer is viewed as `Uint8ClampedArray`.

/// Pack 8-bit channels into ABGR
#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Unpack ABGR into `(r, g, b, a)`
#[inline]
pub const fn unpack_rgba(color: u32) -> (u8, u8, u8, u8) {
    (
        (color & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        ((color >> 16) & 0xFF) as u8,
        (color >> 24) as u8,
    )
}

/// Convert a `0xRRGGBB` literal to opaque ABGR
#[inline]
pub const fn from_rgb_hex(hex: u32) -> u32 {
    pack_rgba((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

/// HSVA to ABGR.
///
/// `h` in degrees (wrapped into 0..360), `s`, `v` and `a` in percent (0..=100).
pub fn from_hsva(h: f32, s: f32, v: f32, a: f32) -> u32 {
    let h = h.rem_euclid(360.0);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let v = (v / 100.0).clamp(0.0, 1.0);
    let a = (a / 100.0).clamp(0.0, 1.0);

    let chroma = v * s;
    let secondary = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    pack_rgba(channel(r + m), channel(g + m), channel(b + m), channel(a))
}

#[inline]
fn channel(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_hex_is_abgr() {
        assert_eq!(from_rgb_hex(0x0F1012), 0xFF12100F);
    }

    #[test]
    fn hsva_primaries() {
        assert_eq!(from_hsva(0.0, 100.0, 100.0, 100.0), pack_rgba(255, 0, 0, 255));
        assert_eq!(from_hsva(120.0, 100.0, 100.0, 100.0), pack_rgba(0, 255, 0, 255));
        assert_eq!(from_hsva(240.0, 100.0, 100.0, 100.0), pack_rgba(0, 0, 255, 255));
        assert_eq!(from_hsva(360.0, 100.0, 100.0, 100.0), pack_rgba(255, 0, 0, 255));
    }

    #[test]
    fn bubble_palette_is_opaque_and_saturated() {
        let (r, g, b, a) = unpack_rgba(from_hsva(200.0, 80.0, 80.0, 100.0));
        assert_eq!(a, 255);
        assert_eq!(r.max(g).max(b), 204);
        assert_eq!(r.min(g).min(b), 41);
    }
}
