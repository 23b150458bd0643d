//! Bubble - a circular body bouncing around the viewport
//!
//! A bubble never rotates and never changes size. Everything that moves it
//! goes through its velocity: integration is the only place the position
//! changes, walls and the pointer only nudge the velocity.

mod body;
mod borders;
mod motion;
mod spawn;

pub use body::{Border, Bubble};
pub use borders::WallContacts;
