//! Container registry catalog for reggie
//!
//! Reads the registry settings a host spreads across
//! `/etc/containers/registries.d/`, `/etc/sysconfig/docker`,
//! `/etc/docker/daemon.json` and `/etc/crio/crio.conf`, and merges them into a
//! single [`RegistryCatalog`] keyed by registry URL.
//!
//! Sources are applied in that order and each one replaces whole entries. A
//! registry mentioned by `crio.conf` ends up with exactly what `crio.conf`
//! says about it, whatever the earlier files said.

pub mod catalog;
pub mod config;
pub mod entry;
pub mod error;
pub mod sources;

pub use catalog::RegistryCatalog;
pub use config::CatalogConfig;
pub use entry::{RegistryEntry, RegistryOptions};
pub use error::{Error, Result};
pub use sources::{
    CrioSource, DaemonJsonSource, MissingPolicy, RegistriesDirSource, RegistryMap,
    RegistrySource, SysconfigSource,
};
