//! Error types for stream seeding and access.
//!
//! This module provides:
//! - `StreamError`: Errors from seeded-stream configuration and access

use thiserror::Error;

/// Seeded-stream errors.
///
/// Only stream configuration is recoverable; malformed sampling inputs
/// (empty collections, inverted bounds, mismatched weights) are programmer
/// errors and panic instead. See the crate-level docs for the taxonomy.
///
/// # Variants
/// - `AlreadySeeded`: the server stream was seeded a second time
/// - `NotSeeded`: the server stream was accessed before seeding
///
/// # Examples
/// ```
/// use sampler_core::{ServerStream, StreamError};
///
/// ServerStream::seed(7).unwrap();
/// assert_eq!(ServerStream::seed(8), Err(StreamError::AlreadySeeded));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StreamError {
    /// The server stream was already seeded; reseeding would silently
    /// rewind every consumer of the stream.
    #[error("server stream has already been seeded")]
    AlreadySeeded,

    /// The server stream was used before its owner seeded it.
    #[error("server stream used before seeding; call ServerStream::seed first")]
    NotSeeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_seeded_display() {
        let err = StreamError::AlreadySeeded;
        assert_eq!(format!("{}", err), "server stream has already been seeded");
    }

    #[test]
    fn test_not_seeded_display() {
        let err = StreamError::NotSeeded;
        assert!(format!("{}", err).contains("ServerStream::seed"));
    }
}
