//! Error types for cite-xref.
//!
//! The cross-reference core itself never fails. Errors only arise at the
//! boundaries: decoding an incoming payload, reading configuration, and
//! posting events to a dispatcher that has stopped.

use thiserror::Error;

/// Result type alias using cite-xref's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the engine boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Payload did not have the expected shape
    #[error("Invalid response payload: {field} - {message}")]
    Ingress { field: String, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The dispatcher queue is gone
    #[error("Dispatcher channel closed: {0}")]
    ChannelClosed(String),
}

impl Error {
    /// Create an ingress error for a specific payload field.
    pub fn ingress(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Ingress {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a channel closed error.
    pub fn channel_closed(what: impl Into<String>) -> Self {
        Self::ChannelClosed(what.into())
    }
}
