//! World - bouncing bubbles simulation
//!
//! WorldCore owns every bubble and runs the frame pipeline:
//! integrate -> repel from pointer -> wall correction -> detect contacts -> resolve contacts.
//!
//! Bubble physics live in systems/bubble, contacts in systems/contact.
//! This module only orchestrates, the wasm facade wraps it for JS.

use crate::core::random::SimRng;
use crate::core::Vec2;
use crate::domain::{SettingsError, SimulationSettings};
use crate::render::{CircleBatch, FrameBuffer, Surface};
use crate::systems::bubble::{Border, Bubble};
use crate::systems::contact::Contact;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "input/input.rs"]
mod input;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use input::{FrameInput, FrameOutcome, InputEvent};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Host-facing render targets, refreshed by `render()`
pub(crate) struct RenderBuffers {
    pub(crate) frame_buffer: FrameBuffer,
    pub(crate) circles: CircleBatch,
    /// [cx, cy, ax, ay] per stored contact
    pub(crate) contact_overlay: Vec<f32>,
}

/// The simulation world
pub struct WorldCore {
    settings: SimulationSettings,
    border: Border,

    // State
    bubbles: Vec<Bubble>,
    contacts: Vec<Contact>,
    pointer: Option<Vec2>,
    rng: SimRng,
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default settings
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, SimulationSettings::default())
    }

    /// Create a world from a settings block (bubble count, seed, tuning)
    pub fn new_with_settings(width: u32, height: u32, settings: SimulationSettings) -> Self {
        init::create_world_core(width, height, settings)
    }

    /// Create a world from a JSON settings block
    pub fn from_settings_json(width: u32, height: u32, json: &str) -> Result<Self, SettingsError> {
        let settings = settings::parse_settings(json)?;
        Ok(init::create_world_core(width, height, settings))
    }

    pub fn width(&self) -> u32 { self.border.width as u32 }

    pub fn height(&self) -> u32 { self.border.height as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn bubble_count(&self) -> usize { self.bubbles.len() }

    pub fn bubbles(&self) -> &[Bubble] { &self.bubbles }

    /// Contacts from the last detection pass
    pub fn contacts(&self) -> &[Contact] { &self.contacts }

    pub fn contact_count(&self) -> usize { self.contacts.len() }

    pub fn pointer(&self) -> Option<Vec2> { self.pointer }

    pub fn settings(&self) -> &SimulationSettings { &self.settings }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) {
        settings::set_max_velocity(self, max_velocity);
    }

    pub fn set_fix_force(&mut self, fix_force: f32) {
        settings::set_fix_force(self, fix_force);
    }

    pub fn set_repel_radius(&mut self, repel_radius: f32) {
        settings::set_repel_radius(self, repel_radius);
    }

    // === COMMANDS ===

    /// Append a bubble centered exactly at (x, y). Returns its id.
    pub fn add_bubble(&mut self, x: f32, y: f32) -> u32 {
        commands::add_bubble(self, Some(Vec2::new(x, y)))
    }

    /// Append a bubble at a random position inside the border. Returns its id.
    pub fn add_random_bubble(&mut self) -> u32 {
        commands::add_bubble(self, None)
    }

    /// Update the pointer position used for repulsion
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        commands::set_pointer(self, Some(Vec2::new(x, y)));
    }

    /// Forget the pointer (it left the viewport); repulsion stops
    pub fn clear_pointer(&mut self) {
        commands::set_pointer(self, None);
    }

    // === FRAME ===

    /// Drain one frame of input, then step (or only inspect when frozen)
    pub fn run_frame(&mut self, input: &FrameInput) -> FrameOutcome {
        input::run_frame(self, input)
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Detect contacts without moving anything (freeze-mode inspection)
    pub fn inspect_contacts(&mut self) -> usize {
        step::inspect_contacts(self)
    }

    // === RENDERING ===

    /// Draw every bubble on `surface`, in insertion order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        render_extract::draw(self, surface);
    }

    /// Refresh the framebuffer, circle batch and contact overlay
    pub fn render(&mut self) {
        render_extract::render(self);
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.render.frame_buffer
    }

    pub fn circles(&self) -> &CircleBatch {
        &self.render.circles
    }

    pub fn contact_overlay(&self) -> &[f32] {
        &self.render.contact_overlay
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
