//! Error types for the modclash scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root is not a directory
    #[error("Not a directory: '{}'", .path.display())]
    NotADirectory { path: PathBuf },

    /// A mod directory holds no manifest file
    #[error("Directory '{}' does not contain a .{extension} file", .dir.display())]
    MissingManifest { dir: PathBuf, extension: String },

    /// A mod directory holds more than one manifest file
    #[error(
        "Directory '{}' contains {} manifest files: {:?}",
        .dir.display(),
        .manifests.len(),
        .manifests
    )]
    MultipleManifests {
        dir: PathBuf,
        manifests: Vec<PathBuf>,
    },

    /// IO error while reading a path
    #[error("IO error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Recursive directory walk failed
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to serialize output
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read or parsed
    #[error("Invalid config file '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code for CLI/JSON consumers
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotADirectory { .. } => "NOT_A_DIRECTORY",
            Self::MissingManifest { .. } => "MISSING_MANIFEST",
            Self::MultipleManifests { .. } => "MULTIPLE_MANIFESTS",
            Self::Io { .. } | Self::Walk(_) => "IO_ERROR",
            Self::Json(_) => "SERIALIZE_ERROR",
            Self::Config { .. } | Self::InvalidConfig(_) => "CONFIG_ERROR",
        }
    }

    /// Process exit code used by the CLI
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotADirectory { .. } => 2,
            Self::MissingManifest { .. } | Self::MultipleManifests { .. } => 3,
            Self::Config { .. } | Self::InvalidConfig(_) => 4,
            Self::Io { .. } | Self::Walk(_) | Self::Json(_) => 1,
        }
    }
}
