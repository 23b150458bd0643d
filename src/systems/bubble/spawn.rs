use crate::core::random::SimRng;
use crate::core::Vec2;
use crate::domain::color::from_hsva;
use crate::domain::SimulationSettings;

use super::{Border, Bubble};

impl Bubble {
    /// Sample a new bubble.
    ///
    /// Radius is a truncated normal sample (at least 1). With `at` set the
    /// bubble is created exactly there, otherwise at a random whole-pixel
    /// position that fits inside the border. Heading is uniform, speed normal.
    pub fn spawn(
        rng: &mut SimRng,
        settings: &SimulationSettings,
        border: Border,
        id: u32,
        at: Option<Vec2>,
    ) -> Self {
        let radius = rng
            .gauss(settings.radius_mean, settings.radius_std_dev)
            .trunc()
            .max(1.0);

        let position = match at {
            Some(p) => p,
            None => {
                let r = radius as i32;
                let x = rng.int_inclusive(r, border.width as i32 - r);
                let y = rng.int_inclusive(r, border.height as i32 - r);
                Vec2::new(x as f32, y as f32)
            }
        };

        let speed = rng.gauss(settings.speed_mean, settings.speed_std_dev);
        let heading = rng.uniform(0.0, 360.0);
        let velocity = Vec2::from_polar(speed, heading);

        let hue = rng.uniform(0.0, 360.0);
        let color = from_hsva(hue, settings.saturation, settings.value, 100.0);

        Bubble::new(id, position, velocity, radius, color, border)
    }
}
