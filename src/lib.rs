//! Bubbles Engine - bouncing bubbles physics in WASM
//!
//! Architecture:
//! - core/        - Vector math, easing, RNG, logging
//! - domain/      - Colors and settings
//! - systems/     - Bubble kinematics and bubble-bubble contacts
//! - render/      - Drawing surfaces
//! - simulation/  - World orchestration and the JS facade

// Logging macro must be in scope before the other modules
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod render;
pub mod simulation;

pub use systems::bubble;
pub use systems::contact;

use wasm_bindgen::prelude::*;

#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Bubbles engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{SettingsError, SimulationSettings};
pub use render::Surface;
pub use simulation::{FrameInput, FrameOutcome, InputEvent, World, WorldCore};
