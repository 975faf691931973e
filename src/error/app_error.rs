use crate::models::ChannelType;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the
/// system.
///
/// The bundled transports never fail, so in the default configuration every
/// business operation succeeds. The variants below are the surfaces a real
/// transport collaborator plugs its failures into.
#[derive(Error, Debug)]
pub enum AppError {
    /// Recipient rejected by the bound channel's address rules.
    ///
    /// Raised by transport collaborators that validate addresses; the
    /// dispatcher itself never inspects recipients.
    #[error("Invalid recipient for {channel}: '{recipient}' ({reason})")]
    InvalidRecipient {
        channel: ChannelType,
        recipient: String,
        reason: String,
    },

    /// Amount could not be parsed or formatted as currency
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Transport collaborator could not complete delivery.
    ///
    /// Surfaced to the caller as-is; the dispatcher never retries.
    #[error("Delivery failed on {channel}")]
    DeliveryFailed {
        channel: ChannelType,
        #[source]
        source: anyhow::Error,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        AppError::Configuration {
            key: "config".to_string(),
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
