//! Registry entry model

use std::fmt;

use serde::Deserialize;
use serde_json::{Value, json};

/// Optional attributes a source may know about a registry.
///
/// Deserializes from the per-registry option mapping used in
/// `registries.d` documents, so the staging key is `sigstore-staging`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistryOptions {
    #[serde(default)]
    pub sigstore: Option<String>,
    #[serde(default, rename = "sigstore-staging")]
    pub sigstore_staging: Option<String>,
    #[serde(default)]
    pub secure: Option<bool>,
}

impl RegistryOptions {
    /// Options carrying only a security flag.
    pub fn secure(secure: bool) -> Self {
        Self {
            secure: Some(secure),
            ..Self::default()
        }
    }
}

/// One registry in the catalog.
///
/// `from_file` is the file that produced the entry. Sources replace entries
/// wholesale, so every field here comes from that one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub url: String,
    pub from_file: String,
    pub secure: Option<bool>,
    pub sigstore: Option<String>,
    pub sigstore_staging: Option<String>,
}

impl RegistryEntry {
    /// An entry with every optional attribute unset.
    pub fn new(url: impl Into<String>, from_file: impl Into<String>) -> Self {
        Self::with_options(url, from_file, RegistryOptions::default())
    }

    pub fn with_options(
        url: impl Into<String>,
        from_file: impl Into<String>,
        options: RegistryOptions,
    ) -> Self {
        Self {
            url: url.into(),
            from_file: from_file.into(),
            secure: options.secure,
            sigstore: options.sigstore,
            sigstore_staging: options.sigstore_staging,
        }
    }

    /// Projection of this entry as a JSON object. Unset fields are `null`.
    pub fn to_value(&self) -> Value {
        json!({
            "url": self.url,
            "from_file": self.from_file,
            "sigstore": self.sigstore,
            "sigstore_staging": self.sigstore_staging,
            "secure": self.secure,
        })
    }
}

impl fmt::Display for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<url={}, sigstore={}, from_file={}, sigstore_staging={}, secure={}>",
            self.url,
            self.sigstore.as_deref().unwrap_or("none"),
            self.from_file,
            self.sigstore_staging.as_deref().unwrap_or("none"),
            self.secure.map_or("none".to_string(), |s| s.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_without_options() {
        let entry = RegistryEntry::new("example.org:500", "afile");

        assert_eq!(entry.url, "example.org:500");
        assert_eq!(entry.from_file, "afile");
        assert_eq!(entry.secure, None);
        assert_eq!(entry.sigstore, None);
        assert_eq!(entry.sigstore_staging, None);
    }

    #[test]
    fn test_with_options_from_mapping() {
        let options: RegistryOptions = serde_json::from_value(json!({
            "sigstore": "s",
            "sigstore-staging": "ss",
            "secure": false,
        }))
        .unwrap();

        let entry = RegistryEntry::with_options("example.org:500", "afile", options);

        assert_eq!(entry.url, "example.org:500");
        assert_eq!(entry.from_file, "afile");
        assert_eq!(entry.sigstore.as_deref(), Some("s"));
        assert_eq!(entry.sigstore_staging.as_deref(), Some("ss"));
        assert_eq!(entry.secure, Some(false));
    }

    #[test]
    fn test_secure_options() {
        let entry = RegistryEntry::with_options("r", "f", RegistryOptions::secure(true));
        assert_eq!(entry.secure, Some(true));
        assert_eq!(entry.sigstore, None);
    }

    #[test]
    fn test_display() {
        let entry = RegistryEntry::new("example.org:500", "afile");
        let printable = entry.to_string();

        assert!(printable.contains("url=example.org:500"));
        assert!(printable.contains("from_file=afile"));
        assert!(printable.contains("secure=none"));
    }

    #[test]
    fn test_to_value_uses_null_for_unset() {
        let entry = RegistryEntry::with_options(
            "quay.io",
            "/etc/crio/crio.conf",
            RegistryOptions::secure(true),
        );

        assert_eq!(
            entry.to_value(),
            json!({
                "url": "quay.io",
                "from_file": "/etc/crio/crio.conf",
                "sigstore": null,
                "sigstore_staging": null,
                "secure": true,
            })
        );
    }
}
