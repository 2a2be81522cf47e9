//! Configuration for the extension management module.
//!
//! Two ways to load it:
//!
//! 1. **Module section**: [`module_config_or_default`] reads the raw JSON
//!    section of the module (`{ "config": { ... } }`) and falls back to
//!    defaults when the section or its `config` field is missing.
//! 2. **Figment**: [`ExtensionManagementConfig::from_figment`] extracts the
//!    [`CONFIG_KEY`] table from a layered configuration.

use figment::Figment;
use serde::Deserialize;
use url::Url;

/// Key of the module's table in the host configuration.
pub const CONFIG_KEY: &str = "extension_management";

/// Configuration error for typed config operations.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid layered config for module '{module}': {source}")]
    InvalidFigment {
        module: String,
        #[source]
        source: Box<figment::Error>,
    },
}

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtensionManagementConfig {
    /// Capacity of the profile change broadcast buffer.
    ///
    /// Subscribers that fall further behind than this lose the oldest events.
    pub event_capacity: usize,

    /// Compare profile locations with case-insensitive paths.
    pub ignore_path_casing: bool,

    /// Profile that is current when the service starts.
    pub initial_profile_location: Option<Url>,
}

impl Default for ExtensionManagementConfig {
    fn default() -> Self {
        Self {
            event_capacity: 64,
            ignore_path_casing: false,
            initial_profile_location: None,
        }
    }
}

impl ExtensionManagementConfig {
    /// Extract the [`CONFIG_KEY`] table from `figment`, using defaults when absent.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidFigment` if the table exists but cannot be deserialized.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        if !figment.contains(CONFIG_KEY) {
            return Ok(Self::default());
        }
        figment
            .extract_inner(CONFIG_KEY)
            .map_err(|e| ConfigError::InvalidFigment {
                module: CONFIG_KEY.to_owned(),
                source: Box::new(e),
            })
    }
}

/// Lenient configuration loader that falls back to defaults.
///
/// - If `module_raw` is `None` or not an object → returns defaults
/// - If the object has no "config" field → returns defaults
/// - If "config" is present but invalid → returns `ConfigError::InvalidConfig`
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` if the config section exists but cannot be deserialized.
pub fn module_config_or_default(
    module_raw: Option<&serde_json::Value>,
) -> Result<ExtensionManagementConfig, ConfigError> {
    let Some(config_section) = module_raw
        .and_then(serde_json::Value::as_object)
        .and_then(|obj| obj.get("config"))
    else {
        return Ok(ExtensionManagementConfig::default());
    };

    serde_json::from_value(config_section.clone()).map_err(|e| ConfigError::InvalidConfig {
        module: CONFIG_KEY.to_owned(),
        source: e,
    })
}
