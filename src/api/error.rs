// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors produced by calls against the image-storage API.
///
/// Variants carry plain strings so the error can be cloned into UI
/// messages. No call is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    Network(String),
    /// The server answered with a non-success status.
    Status { code: u16, body: String },
    /// The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { code, body } => {
                write!(f, "server responded with status {code}: {body}")
            }
            ApiError::Decode(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl std::error::Error for ApiError {}
