//! Physics systems

pub mod bubble;
pub mod contact;
