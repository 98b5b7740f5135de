//! Unified error types for reactivate.
//!
//! The interactive surface cannot produce invalid input (toggles and a
//! bounded slider), so errors only arise at the edges: command-line
//! arguments, configuration files and terminal I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reactivate operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReactivateError {
    /// Training intensity outside the 1-10 scale
    #[error("Invalid training intensity {value}: must be between {min} and {max}")]
    InvalidIntensity { value: i64, min: u8, max: u8 },

    /// A label that is not part of the onboarding catalog
    #[error("Unknown {kind} '{label}' (expected one of: {expected})")]
    UnknownLabel {
        kind: CatalogKind,
        label: String,
        expected: String,
    },

    /// IO errors with context
    #[error("IO error at {}: {message}", .path.display())]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization failures for plan output
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Which onboarding catalog a label was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    BodyArea,
    Equipment,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BodyArea => write!(f, "body area"),
            Self::Equipment => write!(f, "equipment"),
        }
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for reactivate operations
pub type Result<T> = std::result::Result<T, ReactivateError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ReactivateError {
    /// Create an intensity range error
    pub fn invalid_intensity(value: i64) -> Self {
        Self::InvalidIntensity {
            value,
            min: crate::model::Intensity::MIN,
            max: crate::model::Intensity::MAX,
        }
    }

    /// Create an unknown-label error listing the accepted labels
    pub fn unknown_label(kind: CatalogKind, label: impl Into<String>, expected: &[String]) -> Self {
        Self::UnknownLabel {
            kind,
            label: label.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: path.into(),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<serde_json::Error> for ReactivateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
