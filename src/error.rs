//! @ai:module:intent Define error types for submission fetching and comparison
//! @ai:module:layer domain
//! @ai:module:public_api Error, FetchError, Result
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for library operations that abort a whole request
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Invalid submissions dump {path}: {message}")]
    Dump { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Please enter at least one handle.")]
    EmptyInput,

    #[error("Too many handles: got {count}, at most {max} can be compared")]
    TooManyHandles { count: usize, max: usize },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Comparison worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// @ai:intent Failure to obtain one handle's submissions; affects that handle only
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Error for {handle}: {cause}")]
pub struct FetchError {
    pub handle: String,
    pub cause: String,
}

impl FetchError {
    /// @ai:intent Build a fetch error from any displayable cause
    /// @ai:effects pure
    pub fn new(handle: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self {
            handle: handle.into(),
            cause: cause.to_string(),
        }
    }
}
