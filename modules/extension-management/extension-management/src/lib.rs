//! Extension Management Module
//!
//! Profile-aware extension management over a remote channel. Install,
//! uninstall and listing calls are scoped to the current extensions profile;
//! switching profiles publishes the user extensions that appeared or
//! disappeared.
//!
//! The module provides [`ProfileAwareExtensionManagementService`], which
//! implements `ProfileAwareExtensionManagementClient` from the SDK.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod wiring;

pub use config::{ConfigError, ExtensionManagementConfig, module_config_or_default};
pub use domain::{
    ExtUri, ExtensionManagementChannelClient, ProfileAwareExtensionManagementService, UriIdentity,
};
pub use wiring::wire_service;
