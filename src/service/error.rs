//! Error types for movie service operations.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for movie service operations.
#[derive(Debug)]
pub enum HandlerError {
    /// Request payload failed to decode as a movie.
    DecodeFailed(String),
    /// No movie with the given id.
    NotFound(String),
    /// Response payload failed to serialize.
    Encode(String),
    /// Store error (lock poisoned).
    Store(StoreError),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            HandlerError::NotFound(id) => write!(f, "movie not found: {}", id),
            HandlerError::Encode(msg) => write!(f, "encode failed: {}", msg),
            HandlerError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Store(err)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::Encode(_) => 500,
            HandlerError::Store(_) => 500,
        }
    }
}
