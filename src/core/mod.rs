//! Core math and utilities shared by every system

#[macro_use]
pub mod utils;
pub mod easing;
pub mod random;
pub mod vec2;

pub use vec2::Vec2;
