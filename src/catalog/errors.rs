//! Store-specific error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// The only failure mode is a poisoned lock, which can happen after a
/// handler panicked while holding it. Callers surface it as an internal
/// server error rather than propagating the panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store lock was poisoned by a panicking writer
    #[error("course store lock poisoned")]
    LockPoisoned,
}
