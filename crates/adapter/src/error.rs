//! Error types for the NanoInteractive adapter.
//!
//! Errors are reported as [`error_stack::Report`]s wrapping an
//! [`AdapterError`]. The variant tells the host which class of failure it is
//! looking at: a problem with what it sent us, or a problem with what the
//! partner sent back.

use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The bid request (or one of its impressions) cannot be sent to the partner.
    #[display("Bad input: {message}")]
    BadInput { message: String },

    /// The partner answered with something we cannot use.
    #[display("Bad server response: {message}")]
    BadServerResponse { message: String },

    /// Encoding the outbound body failed.
    #[display("Serialization error: {message}")]
    Serialization { message: String },

    /// Settings could not be loaded or did not validate.
    #[display("Configuration error: {message}")]
    Configuration { message: String },
}

impl AdapterError {
    #[must_use]
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::BadInput {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn bad_server_response(message: impl Into<String>) -> Self {
        Self::BadServerResponse {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_bad_input(&self) -> bool {
        matches!(self, Self::BadInput { .. })
    }

    #[must_use]
    pub fn is_bad_server_response(&self) -> bool {
        matches!(self, Self::BadServerResponse { .. })
    }

    /// The message without the class prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadInput { message }
            | Self::BadServerResponse { message }
            | Self::Serialization { message }
            | Self::Configuration { message } => message,
        }
    }
}
