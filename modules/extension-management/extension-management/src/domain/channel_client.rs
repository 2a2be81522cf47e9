//! Base extension management client over an IPC channel.

use std::sync::Arc;

use async_trait::async_trait;
use extension_management_sdk::{
    ChannelError, ExtensionManagementChannel, ExtensionManagementClient, ExtensionManagementError,
    ExtensionType, GalleryExtension, InstallOptions, InstallVsixOptions, LocalExtension,
    UninstallOptions, commands,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// Client that forwards every operation as one channel command.
///
/// Arguments are sent as a positional JSON array; replies are decoded into
/// SDK models.
pub struct ExtensionManagementChannelClient {
    channel: Arc<dyn ExtensionManagementChannel>,
}

impl ExtensionManagementChannelClient {
    #[must_use]
    pub fn new(channel: Arc<dyn ExtensionManagementChannel>) -> Self {
        Self { channel }
    }

    async fn call<A, R>(
        &self,
        command: &'static str,
        args: &A,
    ) -> Result<R, ExtensionManagementError>
    where
        A: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let args = serde_json::to_value(args).map_err(|e| {
            ExtensionManagementError::InvalidArgument(format!("{command}: {e}"))
        })?;

        tracing::debug!(command, "calling extension management channel");
        let reply = self
            .channel
            .call(command, args)
            .await
            .map_err(|e| log_and_convert(command, e))?;

        serde_json::from_value(reply).map_err(|e| {
            tracing::error!(command, error = %e, "undecodable extension management reply");
            ExtensionManagementError::InvalidResponse(format!("{command}: {e}"))
        })
    }
}

fn log_and_convert(command: &str, e: ChannelError) -> ExtensionManagementError {
    tracing::error!(command, error = ?e, "extension management channel call failed");
    e.into()
}

#[async_trait]
impl ExtensionManagementClient for ExtensionManagementChannelClient {
    async fn install(
        &self,
        vsix: &Url,
        options: InstallVsixOptions,
    ) -> Result<LocalExtension, ExtensionManagementError> {
        self.call(commands::INSTALL, &(vsix, &options)).await
    }

    async fn install_from_gallery(
        &self,
        extension: &GalleryExtension,
        options: InstallOptions,
    ) -> Result<LocalExtension, ExtensionManagementError> {
        self.call(commands::INSTALL_FROM_GALLERY, &(extension, &options))
            .await
    }

    async fn uninstall(
        &self,
        extension: &LocalExtension,
        options: UninstallOptions,
    ) -> Result<(), ExtensionManagementError> {
        // The service replies with `null`; anything else is ignored.
        let _: serde_json::Value = self
            .call(commands::UNINSTALL, &(extension, &options))
            .await?;
        Ok(())
    }

    async fn get_installed(
        &self,
        extension_type: Option<ExtensionType>,
        profile_location: Option<&Url>,
    ) -> Result<Vec<LocalExtension>, ExtensionManagementError> {
        self.call(commands::GET_INSTALLED, &(extension_type, profile_location))
            .await
    }
}
