//! Error types and context management for packing operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all packing operations
#[derive(Debug)]
pub enum PackingError {
    /// Construction-time input failed a validation rule
    InputInvalid {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// A single parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Deserializing an external voxel record or deck configuration failed
    RecordParse {
        /// Description of the source being parsed (file path or "<input>")
        source_name: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Reading a voxel record or deck configuration file from disk failed
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputInvalid { reason } => {
                write!(f, "invalid input: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RecordParse { source_name, source } => {
                write!(f, "failed to parse record '{source_name}': {source}")
            }
            Self::Io { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PackingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RecordParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InputInvalid { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackingError>;

/// Construct an invalid-parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackingError {
    PackingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Construct an invalid-input error
pub fn input_invalid(reason: impl ToString) -> PackingError {
    PackingError::InputInvalid {
        reason: reason.to_string(),
    }
}

/// Wrap an I/O failure encountered while reading `path`
pub fn io_error(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> PackingError {
    PackingError::Io {
        path: path.into(),
        source,
    }
}
