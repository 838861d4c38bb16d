//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be constructed (bad base URL, bad header value, missing input).
    #[error("error creating request: {0}")]
    Request(String),

    /// The request could not be sent or its body could not be read.
    #[error("error making request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with anything other than `200 OK`.
    #[error("{status}")]
    Status {
        /// HTTP status returned by the server.
        status: StatusCode,
    },

    /// The response body was not the JSON we expected.
    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No Nomi matched the requested name.
    #[error("no Nomi found with the name: {0}")]
    NotFound(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Request(format!("invalid URL: {}", err))
    }
}

impl Error {
    /// Check if the server rejected the request with a non-200 status.
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }

    /// Check if the body failed to decode.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// HTTP status code, if the server produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
