//! `/etc/containers/registries.d/` documents

use std::path::{Path, PathBuf};

use reggie_fs::{ConfigStore, Format, io};
use serde::Deserialize;
use serde_yaml::Value;

use super::{MissingPolicy, RegistryMap, RegistrySource, display_path, upsert};
use crate::Result;
use crate::entry::{RegistryEntry, RegistryOptions};

/// Per-registry options in a `docker:` mapping. Any `secure` key is ignored.
///
/// `lookaside` and `lookaside-staging` are the newer names for the same
/// stores; when both spellings are present the `sigstore` ones win.
#[derive(Debug, Default, Deserialize)]
struct DockerOptions {
    #[serde(default)]
    sigstore: Option<String>,
    #[serde(default, rename = "sigstore-staging")]
    sigstore_staging: Option<String>,
    #[serde(default)]
    lookaside: Option<String>,
    #[serde(default, rename = "lookaside-staging")]
    lookaside_staging: Option<String>,
}

/// Directory of YAML documents shaped `docker: { <url>: { sigstore, sigstore-staging } }`.
///
/// Registries listed here are always recorded as secure.
#[derive(Debug, Clone)]
pub struct RegistriesDirSource {
    dir: PathBuf,
    missing: MissingPolicy,
    store: ConfigStore,
}

impl RegistriesDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            missing: MissingPolicy::default(),
            store: ConfigStore::new(),
        }
    }

    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    fn load_file(&self, file: &Path, entries: &mut RegistryMap) -> Result<usize> {
        let content = io::read_text(file)?;
        if content.trim().is_empty() {
            tracing::debug!("Skipping empty document {}", file.display());
            return Ok(0);
        }

        let document: Value = self.store.parse(file, &content, Format::Yaml)?;
        let Some(docker) = document.get("docker").and_then(Value::as_mapping) else {
            tracing::debug!("No docker mapping in {}, skipping", file.display());
            return Ok(0);
        };

        let from_file = display_path(file);
        let mut count = 0;
        for (url, options) in docker {
            let Some(url) = url.as_str() else {
                tracing::warn!("Ignoring non-string registry key {:?} in {}", url, file.display());
                continue;
            };

            let options = if options.is_null() {
                DockerOptions::default()
            } else {
                match serde_yaml::from_value::<DockerOptions>(options.clone()) {
                    Ok(options) => options,
                    Err(e) => {
                        tracing::warn!("Ignoring {} in {}: {}", url, file.display(), e);
                        continue;
                    }
                }
            };

            let options = RegistryOptions {
                sigstore: options.sigstore.or(options.lookaside),
                sigstore_staging: options.sigstore_staging.or(options.lookaside_staging),
                secure: Some(true),
            };
            upsert(entries, RegistryEntry::with_options(url, from_file.as_str(), options));
            count += 1;
        }

        tracing::debug!("Read {} registries from {}", count, file.display());
        Ok(count)
    }
}

impl RegistrySource for RegistriesDirSource {
    fn name(&self) -> &'static str {
        "registries.d"
    }

    fn path(&self) -> &Path {
        &self.dir
    }

    fn missing_policy(&self) -> MissingPolicy {
        self.missing
    }

    fn load_into(&self, entries: &mut RegistryMap) -> Result<usize> {
        let mut count = 0;
        for file in io::list_files(&self.dir)? {
            count += self.load_file(&file, entries)?;
        }
        Ok(count)
    }
}
