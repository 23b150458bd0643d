use crate::domain::{SettingsError, SimulationSettings};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn parse_settings(json: &str) -> Result<SimulationSettings, SettingsError> {
    match SimulationSettings::from_json(json) {
        Ok(settings) => {
            console_log!("Settings loaded: {} bubbles, seed {}", settings.bubble_count, settings.seed);
            Ok(settings)
        }
        Err(e) => {
            console_log!("Settings rejected: {}", e);
            Err(e)
        }
    }
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

/// Non-positive caps are ignored
pub(super) fn set_max_velocity(world: &mut WorldCore, max_velocity: f32) {
    if max_velocity > 0.0 {
        world.settings.max_velocity = max_velocity;
    }
}

pub(super) fn set_fix_force(world: &mut WorldCore, fix_force: f32) {
    world.settings.fix_force = fix_force.max(0.0);
}

pub(super) fn set_repel_radius(world: &mut WorldCore, repel_radius: f32) {
    world.settings.repel_radius = repel_radius.max(0.0);
}
