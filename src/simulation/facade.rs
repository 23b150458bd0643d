use wasm_bindgen::prelude::*;

use crate::render::CIRCLE_STRIDE;

use super::perf_stats::PerfStats;
use super::{FrameInput, FrameOutcome, InputEvent, WorldCore};
use crate::core::Vec2;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    /// Events queued by the host since the last frame
    pending: Vec<InputEvent>,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
            pending: Vec::new(),
        }
    }

    /// Create a world from a JSON settings block
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: u32, height: u32, json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_settings_json(width, height, &json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core, pending: Vec::new() })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn bubble_count(&self) -> usize { self.core.bubble_count() }

    #[wasm_bindgen(getter)]
    pub fn contact_count(&self) -> usize { self.core.contact_count() }

    pub fn get_settings_json(&self) -> String {
        self.core.settings_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) {
        self.core.set_max_velocity(max_velocity);
    }

    pub fn set_fix_force(&mut self, fix_force: f32) {
        self.core.set_fix_force(fix_force);
    }

    pub fn set_repel_radius(&mut self, repel_radius: f32) {
        self.core.set_repel_radius(repel_radius);
    }

    // === INPUT ===

    /// Queue a pointer move for the next frame
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::PointerMove(Vec2::new(x, y)));
    }

    /// Queue a click (spawns a bubble at x, y) for the next frame
    pub fn pointer_click(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::PointerClick(Vec2::new(x, y)));
    }

    /// Queue a quit; the next `tick` returns false
    pub fn quit(&mut self) {
        self.pending.push(InputEvent::Quit);
    }

    /// Drain queued input and advance one frame.
    /// `freeze` skips physics and only refreshes contacts.
    /// Returns false once a quit was processed.
    pub fn tick(&mut self, freeze: bool) -> bool {
        let input = FrameInput {
            events: std::mem::take(&mut self.pending),
            freeze,
        };
        self.core.run_frame(&input) == FrameOutcome::Continue
    }

    /// Append a bubble immediately. Returns its id.
    pub fn add_bubble(&mut self, x: f32, y: f32) -> u32 {
        self.core.add_bubble(x, y)
    }

    /// Step the simulation forward, ignoring queued input
    pub fn step(&mut self) {
        self.core.step();
    }

    // === RENDERING ===

    /// Redraw the framebuffer, circle list and contact overlay
    pub fn render(&mut self) {
        self.core.render();
    }

    /// Get pointer to framebuffer pixels (ABGR, for ImageData)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.frame_buffer().pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.frame_buffer().len()
    }

    /// Get pointer to circle list, `CIRCLE_STRIDE` floats per bubble
    pub fn circles_ptr(&self) -> *const f32 {
        self.core.circles().as_ptr()
    }

    /// Length in floats
    pub fn circles_len(&self) -> usize {
        self.core.circles().data().len()
    }

    pub fn circle_stride(&self) -> usize {
        CIRCLE_STRIDE
    }

    /// Get pointer to contact overlay, [cx, cy, ax, ay] per contact
    pub fn contacts_ptr(&self) -> *const f32 {
        self.core.contact_overlay().as_ptr()
    }

    /// Length in floats
    pub fn contacts_len(&self) -> usize {
        self.core.contact_overlay().len()
    }
}

impl World {
    pub fn core(&self) -> &WorldCore {
        &self.core
    }
}
