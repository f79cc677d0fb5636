//! Error types for the cache client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache client.
///
/// A missing key is never an error; every `get` path models absence as
/// `Ok(None)`. Errors here are backend failures and decode failures.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backing store command or connection failure
    #[error("backend error: {0}")]
    Backend(#[from] redis::RedisError),

    /// Stored bytes were not valid UTF-8
    #[error("stored value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Stored bytes did not parse as an integer
    #[error("stored value is not an integer: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// Caller-supplied decode function rejected the stored bytes
    #[error("decode failed: {0}")]
    Decode(String),

    /// Call counter cell held a non-numeric value
    #[error("corrupt call counter at '{0}'")]
    Counter(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache client.
pub type Result<T> = std::result::Result<T, CacheError>;
