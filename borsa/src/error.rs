//! Unified error types for the borsa crate.
//!
//! Two layers of failure exist here:
//! - [`FieldError`]: form-level validation failures, resolved locally by
//!   the caller (inline field messages, button gating).
//! - [`Error`]: session and chain operation failures, surfaced to the
//!   caller as displayable messages.
//!
//! No error in this crate is fatal to the process.

use crate::provider::ProviderError;

/// Result type alias for borsa operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for session operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No wallet provider is present in the host environment.
    #[error("no wallet provider is available in this environment")]
    ProviderUnavailable,

    /// An operation requiring a signing handle was invoked while
    /// disconnected.
    #[error("wallet is not connected")]
    NotConnected,

    /// A form field failed validation.
    #[error("validation failed: {0}")]
    Field(#[from] FieldError),

    /// The wallet provider reported a failure.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A transaction was submitted but failed before or during
    /// confirmation.
    #[error("transaction failed: {0}")]
    Transaction(String),
}

impl Error {
    /// Create a transaction failure with a message.
    #[must_use]
    pub fn transaction(msg: impl Into<String>) -> Self {
        Self::Transaction(msg.into())
    }
}

/// Validation failure for a single form field.
///
/// Produced by the pure validators in [`crate::validate`]; never crosses a
/// provider boundary.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum FieldError {
    /// The field is empty.
    #[error("this field is required")]
    Required,

    /// The value does not match the expected address format.
    #[error("invalid address format")]
    InvalidFormat,

    /// The amount is zero or negative.
    #[error("amount must be greater than 0")]
    NotPositive,

    /// The amount exceeds the configured maximum.
    #[error("amount cannot exceed {max}")]
    ExceedsMax {
        /// The configured maximum that was exceeded.
        max: f64,
    },
}
