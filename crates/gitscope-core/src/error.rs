use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitscopeError {
    // Config errors
    #[error("CONFIG_NOT_FOUND: config file '{path}' does not exist")]
    ConfigNotFound { path: PathBuf },

    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Cache errors
    #[error("CACHE_READ_ERROR: failed to read cache.json: {0}")]
    CacheReadError(String),

    #[error("CACHE_WRITE_ERROR: failed to write cache.json: {0}")]
    CacheWriteError(String),

    #[error("CACHE_INVALID_SCHEMA: unknown schema version '{0}'")]
    CacheInvalidSchema(String),

    // API errors
    #[error("API_REQUEST_FAILED: {0}")]
    ApiRequestFailed(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for GitscopeError {
    fn from(err: serde_json::Error) -> Self {
        GitscopeError::Generic(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, GitscopeError>;
