//! Cross-cutting error types for SaborLocal.
//!
//! Transport and HTTP failures live in `sabor-client` as `ApiFailure`; this
//! module only covers problems detectable without talking to the backend.

use thiserror::Error;

/// Errors raised by domain-level checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Input failed validation before being sent anywhere.
    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
