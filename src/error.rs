//! Error types for the pmquad index.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PmError>;

/// Errors surfaced by the mutating index operations.
///
/// Queries never fail: they return empty results or `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PmError {
    /// A city with the same name or location, or an equal road, is already mapped.
    #[error("already mapped: {0}")]
    AlreadyMapped(String),

    /// The city or road lies outside the universe.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// Non-finite coordinates, bad universe extents or bad configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PmError::AlreadyMapped("city Baltimore".to_string());
        assert_eq!(err.to_string(), "already mapped: city Baltimore");

        let err = PmError::OutOfBounds("road A-B".to_string());
        assert_eq!(err.to_string(), "out of bounds: road A-B");
    }
}
