//! Error types for the preference store

use super::types::ValueType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by preference store operations
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Empty or reserved key, or text that does not parse as the requested type
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A read asked for a different type than the one the key was stored as
    #[error("preference '{key}' is stored as {stored}, not {requested}")]
    TypeMismatch {
        key: String,
        stored: ValueType,
        requested: ValueType,
    },

    #[error("failed to access preference file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preference file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize preferences")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to encode key index")]
    KeyIndex(#[from] serde_json::Error),
}

impl PrefsError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PrefsError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PrefsError>;
