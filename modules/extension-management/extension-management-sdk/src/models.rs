//! Domain models exchanged with the extension management service.
//!
//! All models cross the channel as JSON with camelCase field names.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Location of an extensions profile. `None` selects the default profile.
pub type ProfileLocation = Option<Url>;

/// Identifier of an extension (`publisher.name`), optionally with its gallery uuid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionIdentifier {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl ExtensionIdentifier {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uuid: None,
        }
    }

    #[must_use]
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Case-normalized key used for ordering and lookups.
    #[must_use]
    pub fn to_key(&self) -> String {
        self.id.to_lowercase()
    }
}

impl PartialEq for ExtensionIdentifier {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (&self.uuid, &other.uuid) {
            return a == b;
        }
        self.to_key() == other.to_key()
    }
}

impl Eq for ExtensionIdentifier {}

impl fmt::Display for ExtensionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Where an installed extension comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtensionType {
    /// Bundled with the host application.
    System,
    /// Installed by the user.
    User,
}

/// Subset of the extension manifest that consumers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    pub name: String,
    pub publisher: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An extension installed in some profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalExtension {
    pub identifier: ExtensionIdentifier,
    #[serde(rename = "type")]
    pub extension_type: ExtensionType,
    pub location: Url,
    pub manifest: ExtensionManifest,
    #[serde(default)]
    pub is_builtin: bool,
    #[serde(default)]
    pub is_machine_scoped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_timestamp: Option<i64>,
    #[serde(default)]
    pub pre_release: bool,
}

/// An extension published in the marketplace gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryExtension {
    pub identifier: ExtensionIdentifier,
    pub name: String,
    pub version: String,
    pub publisher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub pre_release: bool,
}

/// Options for installing an extension from the gallery.
// Wire DTO: each flag mirrors one optional field of the channel payload.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallOptions {
    pub is_builtin: bool,
    pub is_machine_scoped: bool,
    pub do_not_include_pack_and_dependencies: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_given_version: Option<String>,
    pub install_pre_release_version: bool,
    /// Profile the extension is installed into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_location: ProfileLocation,
}

/// Options for installing an extension from a VSIX archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallVsixOptions {
    #[serde(flatten)]
    pub install: InstallOptions,
    pub install_only_newly_added_from_extension_pack: bool,
}

/// Options for removing an installed extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UninstallOptions {
    pub do_not_include_pack: bool,
    pub do_not_check_dependents: bool,
    /// Profile the extension is removed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_location: ProfileLocation,
}

/// Change in the set of user extensions caused by a profile switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileExtensionsChange {
    pub added: Vec<LocalExtension>,
    pub removed: Vec<LocalExtension>,
}

impl ProfileExtensionsChange {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identifier_key_is_lowercase() {
        let id = ExtensionIdentifier::new("MS-Python.Python");
        assert_eq!(id.to_key(), "ms-python.python");
    }

    #[test]
    fn identifiers_compare_case_insensitively() {
        assert_eq!(
            ExtensionIdentifier::new("A.Ext"),
            ExtensionIdentifier::new("a.ext")
        );
        assert_ne!(
            ExtensionIdentifier::new("a.ext"),
            ExtensionIdentifier::new("b.ext")
        );
    }

    #[test]
    fn identifiers_with_uuids_compare_by_uuid() {
        let a = ExtensionIdentifier::new("a.ext").with_uuid("1");
        let renamed = ExtensionIdentifier::new("a.renamed").with_uuid("1");
        let other = ExtensionIdentifier::new("a.ext").with_uuid("2");
        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn local_extension_uses_camel_case_wire_names() {
        let ext: LocalExtension = serde_json::from_value(json!({
            "identifier": { "id": "a.ext" },
            "type": "user",
            "location": "file:///home/me/.ext/a.ext-1.0.0",
            "manifest": { "name": "ext", "publisher": "a", "version": "1.0.0" },
            "isMachineScoped": true
        }))
        .unwrap();

        assert_eq!(ext.extension_type, ExtensionType::User);
        assert!(ext.is_machine_scoped);
        assert!(!ext.is_builtin);
        assert_eq!(ext.installed_timestamp, None);
    }

    #[test]
    fn vsix_options_flatten_install_options() {
        let options = InstallVsixOptions {
            install: InstallOptions {
                profile_location: Some(Url::parse("file:///profiles/work").unwrap()),
                ..InstallOptions::default()
            },
            install_only_newly_added_from_extension_pack: true,
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["profileLocation"], json!("file:///profiles/work"));
        assert_eq!(value["installOnlyNewlyAddedFromExtensionPack"], json!(true));
        assert!(value.get("install").is_none());
    }

    #[test]
    fn install_options_carry_every_flag() {
        let options: InstallOptions = serde_json::from_value(json!({
            "isBuiltin": true,
            "isMachineScoped": true,
            "doNotIncludePackAndDependencies": true,
            "installPreReleaseVersion": true
        }))
        .unwrap();

        assert!(options.is_builtin);
        assert!(options.is_machine_scoped);
        assert!(options.do_not_include_pack_and_dependencies);
        assert!(options.install_pre_release_version);
        assert_eq!(options.install_given_version, None);
        assert_eq!(options.profile_location, None);
    }
}
