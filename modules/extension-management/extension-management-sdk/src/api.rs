//! Public API traits for extension management.
//!
//! [`ExtensionManagementClient`] is the base capability set exposed by the
//! remote service. [`ProfileAwareExtensionManagementClient`] is the surface
//! consumers use: the same operations, scoped to the active profile, plus
//! profile switching.

use async_trait::async_trait;
use tokio::sync::broadcast;
use url::Url;

use crate::error::ExtensionManagementError;
use crate::models::{
    ExtensionType, GalleryExtension, InstallOptions, InstallVsixOptions, LocalExtension,
    ProfileExtensionsChange, ProfileLocation, UninstallOptions,
};

/// Base extension management operations.
///
/// Every call carries its own profile location; the implementation does not
/// keep any profile state.
#[async_trait]
pub trait ExtensionManagementClient: Send + Sync {
    /// Install an extension from a VSIX archive.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises.
    async fn install(
        &self,
        vsix: &Url,
        options: InstallVsixOptions,
    ) -> Result<LocalExtension, ExtensionManagementError>;

    /// Install an extension from the marketplace gallery.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises.
    async fn install_from_gallery(
        &self,
        extension: &GalleryExtension,
        options: InstallOptions,
    ) -> Result<LocalExtension, ExtensionManagementError>;

    /// Remove an installed extension.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises.
    async fn uninstall(
        &self,
        extension: &LocalExtension,
        options: UninstallOptions,
    ) -> Result<(), ExtensionManagementError>;

    /// List installed extensions of `extension_type` (all types for `None`)
    /// in the profile at `profile_location`.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises.
    async fn get_installed(
        &self,
        extension_type: Option<ExtensionType>,
        profile_location: Option<&Url>,
    ) -> Result<Vec<LocalExtension>, ExtensionManagementError>;
}

/// Extension management scoped to a current profile.
///
/// ```ignore
/// let svc: Arc<dyn ProfileAwareExtensionManagementClient> = ...;
/// let mut changes = svc.subscribe();
///
/// svc.switch_extensions_profile(Some(work_profile)).await?;
/// if let Ok(change) = changes.try_recv() {
///     // change.added / change.removed
/// }
/// ```
#[async_trait]
pub trait ProfileAwareExtensionManagementClient: Send + Sync {
    /// Install from VSIX into the current profile.
    ///
    /// Any `profile_location` in `options` is replaced by the current one.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises.
    async fn install(
        &self,
        vsix: &Url,
        options: InstallVsixOptions,
    ) -> Result<LocalExtension, ExtensionManagementError>;

    /// Install from the gallery into the current profile.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises.
    async fn install_from_gallery(
        &self,
        extension: &GalleryExtension,
        options: InstallOptions,
    ) -> Result<LocalExtension, ExtensionManagementError>;

    /// Remove an extension from the current profile.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises.
    async fn uninstall(
        &self,
        extension: &LocalExtension,
        options: UninstallOptions,
    ) -> Result<(), ExtensionManagementError>;

    /// List installed extensions in the current profile.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises.
    async fn get_installed(
        &self,
        extension_type: Option<ExtensionType>,
    ) -> Result<Vec<LocalExtension>, ExtensionManagementError>;

    /// Make `location` the current profile.
    ///
    /// A switch to a location equal to the current one is a no-op. Otherwise
    /// the user extensions of both profiles are listed and, if they differ, a
    /// [`ProfileExtensionsChange`] is published to subscribers.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transport raises while listing. If the
    /// second listing fails the new location stays current.
    async fn switch_extensions_profile(
        &self,
        location: ProfileLocation,
    ) -> Result<(), ExtensionManagementError>;

    /// Location of the current profile.
    fn extensions_profile_resource(&self) -> ProfileLocation;

    /// Subscribe to changes published by profile switches.
    fn subscribe(&self) -> broadcast::Receiver<ProfileExtensionsChange>;
}
