//! Contract of the IPC channel that reaches the extension management service.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ChannelError;

/// Command names understood by the remote extension management service.
pub mod commands {
    pub const INSTALL: &str = "install";
    pub const INSTALL_FROM_GALLERY: &str = "installFromGallery";
    pub const UNINSTALL: &str = "uninstall";
    pub const GET_INSTALLED: &str = "getInstalled";
}

/// A remote procedure channel: invoke a named command with JSON arguments
/// and receive a JSON reply.
///
/// Implementations own connection handling, timeouts and cancellation.
/// Arguments are always a JSON array of positional parameters.
#[async_trait]
pub trait ExtensionManagementChannel: Send + Sync {
    /// Invoke `command` on the remote side.
    ///
    /// # Errors
    ///
    /// - `ChannelError::Transport` if the call could not be delivered
    /// - `ChannelError::Remote` if the remote handler failed
    async fn call(&self, command: &str, args: Value) -> Result<Value, ChannelError>;
}
