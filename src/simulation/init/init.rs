use crate::core::random::SimRng;
use crate::domain::SimulationSettings;
use crate::render::{CircleBatch, FrameBuffer};
use crate::systems::bubble::{Border, Bubble};

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, settings: SimulationSettings) -> WorldCore {
    let border = Border::new(width as f32, height as f32);
    let mut rng = SimRng::new(settings.seed);

    let count = settings.bubble_count;
    let bubbles: Vec<Bubble> = (0..count)
        .map(|id| Bubble::spawn(&mut rng, &settings, border, id, None))
        .collect();

    console_log!("World {}x{} created with {} bubbles", width, height, count);

    WorldCore {
        settings,
        border,
        bubbles,
        contacts: Vec::with_capacity(64),
        pointer: None,
        rng,
        frame: 0,

        render: RenderBuffers {
            frame_buffer: FrameBuffer::new(width, height),
            circles: CircleBatch::new(),
            contact_overlay: Vec::with_capacity(64 * 4),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
