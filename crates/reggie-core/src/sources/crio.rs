//! `/etc/crio/crio.conf`

use std::path::{Path, PathBuf};

use reggie_fs::{ConfigStore, Format};
use serde::Deserialize;

use super::{MissingPolicy, RegistryMap, RegistrySource, display_path, upsert_urls};
use crate::{Error, Result};

const IMAGE_SECTION: &str = "crio.image";

#[derive(Debug, Deserialize)]
struct CrioConfig {
    crio: Option<CrioTable>,
}

#[derive(Debug, Deserialize)]
struct CrioTable {
    image: Option<ImageTable>,
}

#[derive(Debug, Deserialize)]
struct ImageTable {
    #[serde(default)]
    registries: Vec<String>,
    #[serde(default)]
    insecure_registries: Vec<String>,
}

/// The cri-o configuration file. Unlike the other sources, the `[crio.image]`
/// table is required.
#[derive(Debug, Clone)]
pub struct CrioSource {
    path: PathBuf,
    missing: MissingPolicy,
    store: ConfigStore,
}

impl CrioSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing: MissingPolicy::default(),
            store: ConfigStore::new(),
        }
    }

    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }
}

impl RegistrySource for CrioSource {
    fn name(&self) -> &'static str {
        "crio.conf"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn missing_policy(&self) -> MissingPolicy {
        self.missing
    }

    fn load_into(&self, entries: &mut RegistryMap) -> Result<usize> {
        let config: CrioConfig = self.store.load_as(&self.path, Format::Toml)?;
        let image = config
            .crio
            .and_then(|crio| crio.image)
            .ok_or_else(|| Error::MissingSection {
                path: self.path.clone(),
                section: IMAGE_SECTION.to_string(),
            })?;

        let from_file = display_path(&self.path);
        let mut count = upsert_urls(entries, &image.registries, &from_file, true);
        count += upsert_urls(entries, &image.insecure_registries, &from_file, false);
        Ok(count)
    }
}
