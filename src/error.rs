//! Error types for the expiring cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache library.
///
/// Every fallible operation returns one of these as a value; nothing in the
/// library terminates the process on a cache error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache
    #[error("key not found in cache")]
    NotFound,

    /// TTL or sweep interval rejected at a configuration boundary
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache library.
pub type Result<T> = std::result::Result<T, CacheError>;
