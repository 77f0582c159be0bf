//! Error types for the API client.

use std::time::Duration;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed before a response was received (network error or timeout).
    #[error("Request failed")]
    RequestFailed,
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The API returned a non-success status.
    ///
    /// `code` is taken from the JSON error body when present, otherwise it is
    /// synthesized as `HTTP_<status>`.
    #[error("API error {code} (status {status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    /// The API answered 429 Too Many Requests.
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },
    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A required argument (usually a resource id) was blank.
    #[error("{0} is required")]
    MissingArgument(&'static str),
    /// The API answered successfully but the expected resource was absent.
    #[error("no {0} found")]
    NotFound(&'static str),
}

impl Error {
    /// Returns the HTTP status for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}
