//! Error types for the extension management module.

use thiserror::Error;

/// Errors that can occur when using the extension management API.
///
/// The adapters in this module do not recover from any of these; they are
/// returned to the caller as raised by the channel.
#[derive(Debug, Error)]
pub enum ExtensionManagementError {
    /// The channel could not deliver the call.
    #[error("channel transport error: {0}")]
    Transport(String),

    /// The extension management service raised an error.
    #[error("remote error ({name}): {message}")]
    Remote {
        /// Error name reported by the remote side.
        name: String,
        /// Human-readable message.
        message: String,
    },

    /// Call arguments could not be encoded for the channel.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The channel reply could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors raised by an [`crate::ExtensionManagementChannel`] implementation.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("transport: {0}")]
    Transport(String),

    #[error("{name}: {message}")]
    Remote { name: String, message: String },
}

impl From<ChannelError> for ExtensionManagementError {
    fn from(e: ChannelError) -> Self {
        match e {
            ChannelError::Transport(msg) => Self::Transport(msg),
            ChannelError::Remote { name, message } => Self::Remote { name, message },
        }
    }
}
