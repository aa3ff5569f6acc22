//! Where the catalog looks for registry configuration
//!
//! The defaults are the standard locations on a Red Hat style host. A
//! config file may override any of them:
//!
//! ```toml
//! registries_d = "/etc/containers/registries.d/"
//! docker_sysconfig = "/etc/sysconfig/docker-latest"
//! missing = "skip"
//! ```

use std::path::{Path, PathBuf};

use reggie_fs::ConfigStore;
use serde::Deserialize;

use crate::Result;
use crate::sources::{
    CrioSource, DaemonJsonSource, MissingPolicy, RegistriesDirSource, RegistrySource,
    SysconfigSource,
};

pub const DEFAULT_REGISTRIES_D: &str = "/etc/containers/registries.d/";
pub const DEFAULT_DOCKER_SYSCONFIG: &str = "/etc/sysconfig/docker";
pub const DEFAULT_DAEMON_JSON: &str = "/etc/docker/daemon.json";
pub const DEFAULT_CRIO_CONF: &str = "/etc/crio/crio.conf";

/// Source paths and the policy applied when one of them is absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub registries_d: PathBuf,
    pub docker_sysconfig: PathBuf,
    pub daemon_json: PathBuf,
    pub crio_conf: PathBuf,
    pub missing: MissingPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            registries_d: PathBuf::from(DEFAULT_REGISTRIES_D),
            docker_sysconfig: PathBuf::from(DEFAULT_DOCKER_SYSCONFIG),
            daemon_json: PathBuf::from(DEFAULT_DAEMON_JSON),
            crio_conf: PathBuf::from(DEFAULT_CRIO_CONF),
            missing: MissingPolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Load from a TOML, JSON or YAML file. Absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Re-base every absolute path under `root`, e.g. a mounted image.
    /// Relative paths are left alone.
    pub fn with_root(mut self, root: &Path) -> Self {
        for path in [
            &mut self.registries_d,
            &mut self.docker_sysconfig,
            &mut self.daemon_json,
            &mut self.crio_conf,
        ] {
            if let Ok(relative) = path.strip_prefix("/") {
                *path = root.join(relative);
            }
        }
        self
    }

    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    /// The four sources in precedence order, lowest first.
    pub fn sources(&self) -> Vec<Box<dyn RegistrySource>> {
        vec![
            Box::new(
                RegistriesDirSource::new(&self.registries_d).with_missing_policy(self.missing),
            ),
            Box::new(
                SysconfigSource::new(&self.docker_sysconfig).with_missing_policy(self.missing),
            ),
            Box::new(DaemonJsonSource::new(&self.daemon_json).with_missing_policy(self.missing)),
            Box::new(CrioSource::new(&self.crio_conf).with_missing_policy(self.missing)),
        ]
    }
}
