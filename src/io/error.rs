//! Error types for the image to tactile pattern pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum TactileError {
    /// Loader was given something it cannot treat as an image
    ///
    /// Covers unsupported file extensions, in-memory buffers that are not
    /// an image, and decoded images with zero width or height.
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Failed to decode source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Target grid has a zero dimension
    InvalidGridSize {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Export format outside the supported set
    UnsupportedFormat {
        /// The rejected format name
        format: String,
    },

    /// Raw pattern data violates the tactile matrix invariants
    InvalidPattern {
        /// Description of the violated invariant
        reason: String,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for TactileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidGridSize { rows, cols } => {
                write!(
                    f,
                    "Invalid grid size {rows}x{cols}: both dimensions must be positive"
                )
            }
            Self::UnsupportedFormat { format } => {
                write!(f, "Unsupported export format '{format}'")
            }
            Self::InvalidPattern { reason } => {
                write!(f, "Invalid tactile pattern: {reason}")
            }
            Self::Serialization { source } => {
                write!(f, "Pattern serialization failed: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for TactileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, TactileError>;

impl From<serde_json::Error> for TactileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<std::io::Error> for TactileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TactileError {
    TactileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> TactileError {
    TactileError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid pattern error
pub fn invalid_pattern(reason: &impl ToString) -> TactileError {
    TactileError::InvalidPattern {
        reason: reason.to_string(),
    }
}
