//! Content loading errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported catalog format for {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Malformed YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Built-in catalog is unusable: {0}")]
    Builtin(String),
}

impl ContentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ContentError::Io { .. } | ContentError::UnsupportedFormat { .. } => {
                ErrorCode::ContentUnavailable
            }
            _ => ErrorCode::ContentInvalid,
        }
    }
}
