//! Extension Management SDK
//!
//! This crate provides the public API for the `extension-management` module:
//!
//! - [`ProfileAwareExtensionManagementClient`] - Public API trait for consumers
//! - [`ExtensionManagementClient`] - Base operations, each taking an explicit profile
//! - [`ExtensionManagementChannel`] - Contract of the IPC channel to the remote service
//! - [`LocalExtension`], [`GalleryExtension`], options - Domain models
//! - [`ExtensionManagementError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use extension_management_sdk::{InstallOptions, ProfileAwareExtensionManagementClient};
//!
//! let installed = svc.install_from_gallery(&gallery_ext, InstallOptions::default()).await?;
//! svc.switch_extensions_profile(Some(other_profile)).await?;
//! ```

pub mod api;
pub mod channel;
pub mod error;
pub mod models;

pub use api::{ExtensionManagementClient, ProfileAwareExtensionManagementClient};
pub use channel::{ExtensionManagementChannel, commands};
pub use error::{ChannelError, ExtensionManagementError};
pub use models::{
    ExtensionIdentifier, ExtensionManifest, ExtensionType, GalleryExtension, InstallOptions,
    InstallVsixOptions, LocalExtension, ProfileExtensionsChange, ProfileLocation,
    UninstallOptions,
};
