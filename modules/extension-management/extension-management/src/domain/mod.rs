//! Domain layer for extension management.

pub mod channel_client;
pub mod delta;
pub mod profile_aware;
pub mod uri_identity;


pub use channel_client::ExtensionManagementChannelClient;
pub use delta::{Delta, delta};
pub use profile_aware::ProfileAwareExtensionManagementService;
pub use uri_identity::{ExtUri, UriIdentity};
