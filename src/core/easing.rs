//! Range remapping with power easing.

/// Map `x` from `from` onto `to`, easing the normalized position with `t^power`.
///
/// `chrange(d, (0.0, 200.0), (1.0, 0.0), 2)` is `1 - (d / 200)^2`.
/// `x` is clamped into `from` first, so results stay inside `to`.
#[inline]
pub fn chrange(x: f32, from: (f32, f32), to: (f32, f32), power: i32) -> f32 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let t = ((x - from.0) / span).clamp(0.0, 1.0).powi(power);
    to.0 + t * (to.1 - to.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_falloff() {
        assert_eq!(chrange(0.0, (0.0, 200.0), (1.0, 0.0), 2), 1.0);
        assert_eq!(chrange(200.0, (0.0, 200.0), (1.0, 0.0), 2), 0.0);
        assert!((chrange(100.0, (0.0, 200.0), (1.0, 0.0), 2) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn degenerate_range_returns_start() {
        assert_eq!(chrange(5.0, (3.0, 3.0), (0.5, 1.0), 1), 0.5);
    }
}
