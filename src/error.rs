//! Request Errors
//!
//! The one failure taxonomy of the app: a request to the remote store failed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The store answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape the caller expected
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Decode(e.to_string())
    }
}
