//! `/etc/docker/daemon.json`

use std::path::{Path, PathBuf};

use reggie_fs::{ConfigStore, Format};
use serde::Deserialize;

use super::{MissingPolicy, RegistryMap, RegistrySource, display_path, upsert_urls};
use crate::Result;

/// The registry keys of daemon.json. The singular `add-registry` next to the
/// plural `insecure-registries` is how docker spells them.
#[derive(Debug, Default, Deserialize)]
struct DaemonConfig {
    #[serde(default, rename = "add-registry")]
    add_registry: Vec<String>,
    #[serde(default, rename = "insecure-registries")]
    insecure_registries: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DaemonJsonSource {
    path: PathBuf,
    missing: MissingPolicy,
    store: ConfigStore,
}

impl DaemonJsonSource {
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

impl RegistrySource for DaemonJsonSource {
    fn name(&self) -> &'static str {
        "daemon.json"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn missing_policy(&self) -> MissingPolicy {
        self.missing
    }

    fn load_into(&self, entries: &mut RegistryMap) -> Result<usize> {
        let config: DaemonConfig = self.store.load_as(&self.path, Format::Json)?;
        let from_file = display_path(&self.path);

        // Insecure last: a URL in both arrays ends up insecure.
        let mut count = upsert_urls(entries, &config.add_registry, &from_file, true);
        count += upsert_urls(entries, &config.insecure_registries, &from_file, false);
        Ok(count)
    }
}
