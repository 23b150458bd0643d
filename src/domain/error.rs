use thiserror::Error;

/// Failure loading or validating simulation settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// JSON did not parse into a settings block.
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of its valid range.
    #[error("invalid setting: {0}")]
    Invalid(String),
}
