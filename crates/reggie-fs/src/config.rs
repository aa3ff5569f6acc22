//! Format-aware document loading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Format, Result, io};

/// Loads structured documents from disk.
///
/// `load` detects the format from the file extension; `load_as` is for host
/// files whose names say nothing about their format (`crio.conf`, files in
/// `registries.d/`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a document, detecting the format from its extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = Format::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
            extension: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })?;
        self.load_as(path, format)
    }

    /// Load a document in an explicit format.
    pub fn load_as<T: DeserializeOwned>(&self, path: &Path, format: Format) -> Result<T> {
        let content = io::read_text(path)?;
        tracing::debug!("Read {} bytes of {} from {}", content.len(), format, path.display());
        self.parse(path, &content, format)
    }

    /// Decode already-read text. `path` is only used for error reporting.
    pub fn parse<T: DeserializeOwned>(
        &self,
        path: &Path,
        content: &str,
        format: Format,
    ) -> Result<T> {
        match format {
            Format::Toml => toml::from_str(content).map_err(|e| Error::parse(path, format, e)),
            Format::Json => {
                serde_json::from_str(content).map_err(|e| Error::parse(path, format, e))
            }
            Format::Yaml => {
                serde_yaml::from_str(content).map_err(|e| Error::parse(path, format, e))
            }
        }
    }
}
