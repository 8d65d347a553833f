//! Error types raised for path precondition violations.

use thiserror::Error;

/// Convenience alias for fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised when a caller violates a path precondition.
///
/// These indicate programming errors on the caller's side, not runtime
/// conditions. Ordinary missing keys, absent defaults, and stored values of
/// the wrong type are never errors; they degrade to defaults or empty
/// results so configuration consumers do not need error handling around
/// ordinary lookups.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// The operation requires a non-empty path.
    #[error("cannot {operation} at an empty path")]
    EmptyPath {
        /// Human-readable name of the rejected operation.
        operation: &'static str,
    },
}
