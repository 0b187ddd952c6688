use std::io;

use thiserror::Error;

/// Library-wide error type for kompose-rpmspec operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Release coordinates are unusable.
    #[error("Invalid release {field} '{value}': {reason}")]
    InvalidRelease { field: &'static str, value: String, reason: String },

    /// Profile requested by name is not built in.
    #[error("Profile '{name}' not found. Available: {available}")]
    ProfileNotFound { name: String, available: String },

    /// Profile content failed validation.
    #[error("Invalid profile '{profile}': {reason}")]
    InvalidProfile { profile: String, reason: String },

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Spec generator binary could not be located.
    #[error("{0} not found in PATH")]
    GeneratorNotFound(String),

    /// Spec generator ran but did not succeed.
    #[error("Error running '{command}': {details}")]
    GeneratorFailed { command: String, details: String },

    /// Generated spec file is missing.
    #[error("Spec file not found: {0}")]
    SpecFileNotFound(String),

    /// An anchor line was required but not present.
    #[error("Anchor line not found in spec file: {0}")]
    AnchorNotFound(String),

    /// Dependency lock could not be fetched.
    #[error("Failed to fetch {location}: {details}")]
    LockFetch { location: String, details: String },

    /// Dependency lock could not be parsed.
    #[error("Failed to parse dependency lock: {0}")]
    LockParse(#[from] serde_yaml::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
