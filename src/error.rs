/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by the whole library.
//!
//! Server-side failures (4xx/5xx) are not errors: they come back as a regular
//! [`crate::model::http::ApiResponse`] with the status code set. Only failures that
//! prevent a response from existing end up here.

use reqwest::StatusCode;
use std::fmt;

/// Convenience result alias used across the crate
pub type PetResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport failure: connection refused, DNS, TLS, invalid header value...
    Http(reqwest::Error),
    /// Local I/O failure, e.g. a photo that cannot be read
    Io(std::io::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// A body could not be turned into the requested type
    Deserialization(String),
    /// Caller supplied an unusable argument
    InvalidInput(String),
    /// The server answered with a status the caller asked to treat as failure
    Unexpected(StatusCode),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(e) => write!(f, "http error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Unexpected(status) => write!(f, "unexpected http status: {status}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Http(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
