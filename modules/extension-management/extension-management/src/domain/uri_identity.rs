//! Identity-aware comparison of profile locations.

use url::Url;

/// Equality predicate over optional resource locations.
pub trait UriIdentity: Send + Sync {
    /// Whether `a` and `b` denote the same resource.
    fn is_equal(&self, a: Option<&Url>, b: Option<&Url>) -> bool;
}

/// Default [`UriIdentity`]: compares comparison keys, optionally ignoring path casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtUri {
    ignore_path_casing: bool,
}

impl ExtUri {
    #[must_use]
    pub fn new(ignore_path_casing: bool) -> Self {
        Self { ignore_path_casing }
    }

    /// Key under which two equal locations collide.
    ///
    /// Scheme and host are case-insensitive; the URL parser lowers the
    /// scheme, opaque hosts of custom schemes are lowered here. With
    /// `ignore_path_casing` the path is percent-decoded before lowering so
    /// non-ASCII letters fold too.
    #[must_use]
    pub fn comparison_key(&self, uri: &Url) -> String {
        let path = if self.ignore_path_casing {
            let decoded = urlencoding::decode_binary(uri.path().as_bytes());
            String::from_utf8_lossy(&decoded).to_lowercase()
        } else {
            uri.path().to_owned()
        };

        let mut key = format!("{}://", uri.scheme());
        if !uri.username().is_empty() || uri.password().is_some() {
            key.push_str(uri.username());
            if let Some(password) = uri.password() {
                key.push(':');
                key.push_str(password);
            }
            key.push('@');
        }
        if let Some(host) = uri.host_str() {
            key.push_str(&host.to_lowercase());
        }
        if let Some(port) = uri.port() {
            key.push(':');
            key.push_str(&port.to_string());
        }
        key.push_str(&path);
        if let Some(query) = uri.query() {
            key.push('?');
            key.push_str(query);
        }
        if let Some(fragment) = uri.fragment() {
            key.push('#');
            key.push_str(fragment);
        }
        key
    }
}

impl UriIdentity for ExtUri {
    fn is_equal(&self, a: Option<&Url>, b: Option<&Url>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b || self.comparison_key(a) == self.comparison_key(b),
            _ => false,
        }
    }
}
