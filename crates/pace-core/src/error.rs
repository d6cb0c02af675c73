//! Error types for configuration definition and registry lookup.
//!
//! Two failure kinds exist: [`ConfigError`] for invariant violations caught
//! while a record is being defined, and [`NotFoundError`] for lookups of
//! names that were never registered. Both are fatal — configuration problems
//! abort environment setup and are never silently defaulted.

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// PaceError
// ---------------------------------------------------------------------------

/// Top-level error type for the pace workspace.
#[derive(Debug, Error)]
pub enum PaceError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Definition-time configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] Box<toml::de::Error>),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid joint pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("invalid sim dt: {0} (must be finite and > 0)")]
    InvalidDt(f64),

    #[error("invalid decimation: {0} (must be >= 1)")]
    InvalidDecimation(u32),

    #[error("joint `{0}` is not driven by any actuator group")]
    UnactuatedJoint(String),

    #[error("joint `{joint}` is driven by both `{first}` and `{second}`")]
    DoublyActuatedJoint {
        joint: String,
        first: String,
        second: String,
    },

    #[error("pattern `{pattern}` in {context} matches no joint")]
    DeadPattern { pattern: String, context: String },

    #[error("encoder bias has {got} entries, expected {expected} (one per joint)")]
    EncoderBiasLength { expected: usize, got: usize },

    #[error("bounds matrix has {got} rows, expected {expected} (4 * joints + 1)")]
    BoundsShape { expected: usize, got: usize },

    #[error("inverted bounds at row {row}: min {min} > max {max}")]
    InvertedBounds { row: usize, min: f64, max: f64 },

    #[error("joint order does not match robot `{robot}`: {detail}")]
    JointOrderMismatch { robot: String, detail: String },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("a configuration named `{0}` is already defined")]
    Duplicate(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`].
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(Box::new(err))
    }
}

// ---------------------------------------------------------------------------
// NotFoundError
// ---------------------------------------------------------------------------

/// An unknown configuration name was requested from the registry.
#[derive(Debug, Error)]
#[error("no configuration registered under name `{0}`")]
pub struct NotFoundError(pub String);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
