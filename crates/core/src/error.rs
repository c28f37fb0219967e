//! Domain fault model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level fault.
///
/// These are violated preconditions and broken invariants: conditions that
/// correct control flow never produces. Expected business outcomes (limit
/// reached, copy unavailable, ...) are returned as values instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was outside its allowed domain (blank name, due date
    /// before borrow date, negative rate, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was attempted from a state that does not allow it.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced aggregate does not exist.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Stable, machine-readable code for this fault kind.
    ///
    /// Used where a workflow boundary reports a contained fault as a result
    /// code rather than propagating it.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidArgument(_) => "INVALID_ARGUMENT",
            DomainError::InvalidState(_) => "INVALID_STATE",
            DomainError::InvalidId(_) => "INVALID_ID",
            DomainError::NotFound => "NOT_FOUND",
        }
    }
}
