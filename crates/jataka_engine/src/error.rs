//! Error type for the input and configuration boundary.
//!
//! The computation pipeline itself is total; only form parsing, config
//! loading and place resolution can fail.

use std::path::PathBuf;

/// Errors from the engine's input boundary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("place resolver error: {0}")]
    Resolver(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
