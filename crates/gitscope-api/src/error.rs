use crate::transfer::TransferError;
use crate::uri::UrlError;
use thiserror::Error;

/// Search client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-200 transport status; the message is the response body
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Embedded status field in a 200 response reported a failure
    #[error("{message}")]
    Api {
        /// Embedded status value, as text
        code: String,
        /// Embedded message field
        message: String,
    },

    /// Network or transport failure during the request
    #[error("Network error: {0}")]
    Network(#[from] TransferError),

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// 200 response whose body is not JSON
    #[error("Invalid JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request URI could not be built
    #[error("URL error: {0}")]
    Url(#[from] UrlError),
}

impl From<ClientError> for gitscope_core::GitscopeError {
    fn from(err: ClientError) -> Self {
        gitscope_core::GitscopeError::ApiRequestFailed(err.to_string())
    }
}
