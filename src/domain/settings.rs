//! Simulation settings
//!
//! Every tunable constant of the bubble world lives here. Hosts can load an
//! override block as JSON; missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};

use super::color::from_rgb_hex;
use super::error::SettingsError;

pub const DEFAULT_BUBBLE_COUNT: u32 = 42;
pub const DEFAULT_MAX_VELOCITY: f32 = 7.0;
pub const DEFAULT_FIX_FORCE: f32 = 5.0;
pub const DEFAULT_REPEL_RADIUS: f32 = 200.0;
pub const DEFAULT_SEED: u64 = 12345;
/// 0x0F1012 as opaque ABGR
pub const DEFAULT_BACKGROUND: u32 = from_rgb_hex(0x0F1012);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    /// Bubbles spawned at world creation
    pub bubble_count: u32,
    /// Speed cap applied before every integration step (pixels per frame)
    pub max_velocity: f32,
    /// Minimum wall push while a bubble overlaps a wall
    pub fix_force: f32,
    /// Pointer repulsion reach
    pub repel_radius: f32,
    pub radius_mean: f32,
    pub radius_std_dev: f32,
    pub speed_mean: f32,
    pub speed_std_dev: f32,
    /// Bubble color saturation, percent
    pub saturation: f32,
    /// Bubble color value, percent
    pub value: f32,
    /// Clear color (ABGR)
    pub background: u32,
    pub seed: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            bubble_count: DEFAULT_BUBBLE_COUNT,
            max_velocity: DEFAULT_MAX_VELOCITY,
            fix_force: DEFAULT_FIX_FORCE,
            repel_radius: DEFAULT_REPEL_RADIUS,
            radius_mean: 25.0,
            radius_std_dev: 5.0,
            speed_mean: 3.0,
            speed_std_dev: 0.5,
            saturation: 80.0,
            value: 80.0,
            background: DEFAULT_BACKGROUND,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: SimulationSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.max_velocity > 0.0) {
            return Err(invalid("maxVelocity must be positive", self.max_velocity));
        }
        if !(self.fix_force >= 0.0) {
            return Err(invalid("fixForce must be non-negative", self.fix_force));
        }
        if !(self.repel_radius >= 0.0) {
            return Err(invalid("repelRadius must be non-negative", self.repel_radius));
        }
        if !(self.radius_mean > 0.0) {
            return Err(invalid("radiusMean must be positive", self.radius_mean));
        }
        if !(self.radius_std_dev >= 0.0) {
            return Err(invalid("radiusStdDev must be non-negative", self.radius_std_dev));
        }
        if !(self.speed_std_dev >= 0.0) {
            return Err(invalid("speedStdDev must be non-negative", self.speed_std_dev));
        }
        if !(0.0..=100.0).contains(&self.saturation) {
            return Err(invalid("saturation must be within 0..=100", self.saturation));
        }
        if !(0.0..=100.0).contains(&self.value) {
            return Err(invalid("value must be within 0..=100", self.value));
        }
        Ok(())
    }
}

fn invalid(what: &str, got: f32) -> SettingsError {
    SettingsError::Invalid(format!("{what} (got {got})"))
}
