//! Host configuration sources
//!
//! Each source reads one path and upserts the registries it finds into a
//! shared [`RegistryMap`]. Sources know nothing about each other; precedence
//! comes only from the order the catalog runs them in.

mod crio;
mod daemon_json;
mod registries_d;
mod sysconfig;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::entry::{RegistryEntry, RegistryOptions};

pub use crio::CrioSource;
pub use daemon_json::DaemonJsonSource;
pub use registries_d::RegistriesDirSource;
pub use sysconfig::{RegistryAssignment, SyntaxError, SysconfigSource, parse_sysconfig};

/// Registry URL to entry, ordered by URL.
pub type RegistryMap = BTreeMap<String, RegistryEntry>;

/// What to do when a source's path does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Fail the reload
    #[default]
    Fail,
    /// Contribute no entries
    Skip,
}

/// A file or directory that contributes registries to the catalog.
pub trait RegistrySource: fmt::Debug {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    /// The path this source reads
    fn path(&self) -> &Path;

    fn missing_policy(&self) -> MissingPolicy {
        MissingPolicy::Fail
    }

    /// Read the source and upsert its registries into `entries`.
    ///
    /// Returns the number of upserts performed. Existing entries for the
    /// same URL are replaced, not merged.
    fn load_into(&self, entries: &mut RegistryMap) -> Result<usize>;
}

/// Insert or replace the entry for `entry.url`.
pub(crate) fn upsert(entries: &mut RegistryMap, entry: RegistryEntry) {
    if let Some(previous) = entries.get(&entry.url) {
        tracing::trace!(
            "Replacing {} from {} with entry from {}",
            entry.url,
            previous.from_file,
            entry.from_file
        );
    }
    entries.insert(entry.url.clone(), entry);
}

/// Upsert every URL with only a security flag set. Returns the count.
pub(crate) fn upsert_urls(
    entries: &mut RegistryMap,
    urls: &[String],
    from_file: &str,
    secure: bool,
) -> usize {
    for url in urls {
        upsert(
            entries,
            RegistryEntry::with_options(url.as_str(), from_file, RegistryOptions::secure(secure)),
        );
    }
    urls.len()
}

pub(crate) fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
