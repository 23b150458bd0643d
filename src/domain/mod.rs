//! Domain data: colors, settings and their errors

pub mod color;
pub mod error;
pub mod settings;

pub use error::SettingsError;
pub use settings::SimulationSettings;
