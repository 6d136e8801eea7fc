//! Error types for the repository layer.
//!
//! [`StoreError::GameDoesNotExist`] is a recoverable, expected
//! condition: lookups before the first `InitGame` event or against an
//! unknown uid surface it, and callers translate it to a local no-op
//! (shutdown handler), a skipped line (kill handler), or an HTTP 404
//! (query layer). It is never fatal.

/// Errors that can occur in the repository layer.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// No game exists for the requested identifier, or no game has
    /// been added yet.
    #[error("game does not exist")]
    GameDoesNotExist,
}
