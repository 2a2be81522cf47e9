//! Profile-aware decorator over a base extension management client.

use std::sync::Arc;

use async_trait::async_trait;
use extension_management_sdk::{
    ExtensionManagementClient, ExtensionManagementError, ExtensionType, GalleryExtension,
    InstallOptions, InstallVsixOptions, LocalExtension, ProfileAwareExtensionManagementClient,
    ProfileExtensionsChange, ProfileLocation, UninstallOptions,
};
use parking_lot::RwLock;
use tokio::sync::{Mutex, broadcast};
use url::Url;

use super::delta::delta;
use super::uri_identity::UriIdentity;
use crate::config::ExtensionManagementConfig;

/// Scopes every call of the wrapped client to the current profile and
/// publishes the extension changes caused by profile switches.
///
/// Profile switches are serialized. Install, uninstall and listing calls are
/// not blocked by a running switch; they use the location current when they
/// start.
pub struct ProfileAwareExtensionManagementService {
    inner: Arc<dyn ExtensionManagementClient>,
    uri_identity: Arc<dyn UriIdentity>,
    profile_location: RwLock<ProfileLocation>,
    switch_lock: Mutex<()>,
    changes: broadcast::Sender<ProfileExtensionsChange>,
}

impl ProfileAwareExtensionManagementService {
    #[must_use]
    pub fn new(
        inner: Arc<dyn ExtensionManagementClient>,
        uri_identity: Arc<dyn UriIdentity>,
        profile_location: ProfileLocation,
        event_capacity: usize,
    ) -> Self {
        let (changes, _) = broadcast::channel(event_capacity.max(1));
        Self {
            inner,
            uri_identity,
            profile_location: RwLock::new(profile_location),
            switch_lock: Mutex::new(()),
            changes,
        }
    }

    /// Build from module configuration.
    #[must_use]
    pub fn from_config(
        inner: Arc<dyn ExtensionManagementClient>,
        uri_identity: Arc<dyn UriIdentity>,
        cfg: &ExtensionManagementConfig,
    ) -> Self {
        Self::new(
            inner,
            uri_identity,
            cfg.initial_profile_location.clone(),
            cfg.event_capacity,
        )
    }

    fn current(&self) -> ProfileLocation {
        self.profile_location.read().clone()
    }

    async fn installed_in(
        &self,
        extension_type: Option<ExtensionType>,
        location: Option<&Url>,
    ) -> Result<Vec<LocalExtension>, ExtensionManagementError> {
        self.inner.get_installed(extension_type, location).await
    }
}

#[async_trait]
impl ProfileAwareExtensionManagementClient for ProfileAwareExtensionManagementService {
    async fn install(
        &self,
        vsix: &Url,
        mut options: InstallVsixOptions,
    ) -> Result<LocalExtension, ExtensionManagementError> {
        options.install.profile_location = self.current();
        self.inner.install(vsix, options).await
    }

    async fn install_from_gallery(
        &self,
        extension: &GalleryExtension,
        mut options: InstallOptions,
    ) -> Result<LocalExtension, ExtensionManagementError> {
        options.profile_location = self.current();
        self.inner.install_from_gallery(extension, options).await
    }

    async fn uninstall(
        &self,
        extension: &LocalExtension,
        mut options: UninstallOptions,
    ) -> Result<(), ExtensionManagementError> {
        options.profile_location = self.current();
        self.inner.uninstall(extension, options).await
    }

    async fn get_installed(
        &self,
        extension_type: Option<ExtensionType>,
    ) -> Result<Vec<LocalExtension>, ExtensionManagementError> {
        let location = self.current();
        self.installed_in(extension_type, location.as_ref()).await
    }

    async fn switch_extensions_profile(
        &self,
        location: ProfileLocation,
    ) -> Result<(), ExtensionManagementError> {
        let _guard = self.switch_lock.lock().await;

        let previous = self.current();
        if self
            .uri_identity
            .is_equal(location.as_ref(), previous.as_ref())
        {
            tracing::debug!(profile = ?location, "extensions profile unchanged");
            return Ok(());
        }

        let old_extensions = self
            .installed_in(Some(ExtensionType::User), previous.as_ref())
            .await?;

        *self.profile_location.write() = location.clone();
        tracing::info!(from = ?previous, to = ?location, "switched extensions profile");

        let new_extensions = match self
            .installed_in(Some(ExtensionType::User), location.as_ref())
            .await
        {
            Ok(extensions) => extensions,
            Err(e) => {
                tracing::warn!(
                    profile = ?location,
                    error = %e,
                    "listing extensions of the new profile failed, no change published"
                );
                return Err(e);
            }
        };

        let diff = delta(old_extensions, new_extensions, |ext| ext.identifier.to_key());
        if diff.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            "profile extensions changed"
        );
        let change = ProfileExtensionsChange {
            added: diff.added,
            removed: diff.removed,
        };
        if self.changes.send(change).is_err() {
            tracing::trace!("no subscribers for profile extension changes");
        }
        Ok(())
    }

    fn extensions_profile_resource(&self) -> ProfileLocation {
        self.current()
    }

    fn subscribe(&self) -> broadcast::Receiver<ProfileExtensionsChange> {
        self.changes.subscribe()
    }
}
