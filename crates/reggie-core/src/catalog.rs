//! The merged registry catalog

use serde_json::{Map, Value};

use crate::config::CatalogConfig;
use crate::entry::RegistryEntry;
use crate::sources::{MissingPolicy, RegistryMap, RegistrySource};
use crate::Result;

/// Registries known to the host, keyed by URL.
///
/// The catalog runs its sources in order on every [`reload`](Self::reload).
/// A later source's entry for a URL replaces the earlier one entirely;
/// nothing is merged field by field.
///
/// # Example
///
/// ```no_run
/// use reggie_core::{CatalogConfig, RegistryCatalog};
///
/// let catalog = RegistryCatalog::load(&CatalogConfig::default())?;
/// for (url, entry) in catalog.iter() {
///     println!("{url}: secure={:?} ({})", entry.secure, entry.from_file);
/// }
/// # Ok::<(), reggie_core::Error>(())
/// ```
#[derive(Debug)]
pub struct RegistryCatalog {
    entries: RegistryMap,
    sources: Vec<Box<dyn RegistrySource>>,
}

impl RegistryCatalog {
    /// An empty catalog over `sources`, lowest precedence first.
    pub fn new(sources: Vec<Box<dyn RegistrySource>>) -> Self {
        Self {
            entries: RegistryMap::new(),
            sources,
        }
    }

    /// An empty catalog over the four standard sources.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.sources())
    }

    /// Build the catalog and read every source once.
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let mut catalog = Self::from_config(config);
        catalog.reload()?;
        Ok(catalog)
    }

    /// Discard the current entries and re-read every source in order.
    ///
    /// On error the catalog holds whatever the sources before the failing one
    /// produced.
    pub fn reload(&mut self) -> Result<()> {
        self.entries.clear();

        for source in &self.sources {
            let path = source.path();
            let count = match source.load_into(&mut self.entries) {
                Ok(count) => count,
                Err(e) if source.missing_policy() == MissingPolicy::Skip && e.is_not_found() => {
                    tracing::info!("Skipping {}: {}", source.name(), e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            tracing::info!(
                source = source.name(),
                path = %path.display(),
                count,
                "Loaded registries"
            );
        }

        tracing::debug!("Catalog holds {} registries", self.entries.len());
        Ok(())
    }

    pub fn entries(&self) -> &RegistryMap {
        &self.entries
    }

    pub fn get(&self, url: &str) -> Option<&RegistryEntry> {
        self.entries.get(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RegistryEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sources in the order `reload` runs them.
    pub fn sources(&self) -> &[Box<dyn RegistrySource>] {
        &self.sources
    }

    /// URL to `{url, from_file, sigstore, sigstore_staging, secure}`, for
    /// handing to any serde encoder.
    pub fn to_projection(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(url, entry)| (url.clone(), entry.to_value()))
            .collect();
        Value::Object(map)
    }
}
