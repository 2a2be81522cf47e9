//! Wiring for the extension management module.
//!
//! Provides `wire_service` to build the profile-aware client on top of a channel.

use std::sync::Arc;

use extension_management_sdk::{
    ExtensionManagementChannel, ProfileAwareExtensionManagementClient,
};

use crate::config::ExtensionManagementConfig;
use crate::domain::{
    ExtUri, ExtensionManagementChannelClient, ProfileAwareExtensionManagementService,
};

/// Build the profile-aware client for `channel`.
///
/// This function:
/// 1. Wraps the channel in an `ExtensionManagementChannelClient`
/// 2. Builds an `ExtUri` honoring `ignore_path_casing`
/// 3. Decorates the base client with profile awareness
///
/// # Example
/// ```ignore
/// let cfg = ExtensionManagementConfig::from_figment(&figment)?;
/// let svc = wire_service(channel, &cfg);
/// svc.switch_extensions_profile(Some(profile)).await?;
/// ```
#[must_use]
pub fn wire_service(
    channel: Arc<dyn ExtensionManagementChannel>,
    cfg: &ExtensionManagementConfig,
) -> Arc<dyn ProfileAwareExtensionManagementClient> {
    let base = Arc::new(ExtensionManagementChannelClient::new(channel));
    let identity = Arc::new(ExtUri::new(cfg.ignore_path_casing));
    let svc = ProfileAwareExtensionManagementService::from_config(base, identity, cfg);
    tracing::info!(
        profile = ?cfg.initial_profile_location,
        ignore_path_casing = cfg.ignore_path_casing,
        "profile-aware extension management wired"
    );
    Arc::new(svc)
}
