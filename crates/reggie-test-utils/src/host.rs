//! [`TestHost`] builder for registry configuration scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const REGISTRIES_D: &str = "etc/containers/registries.d";
pub const DOCKER_SYSCONFIG: &str = "etc/sysconfig/docker";
pub const DAEMON_JSON: &str = "etc/docker/daemon.json";
pub const CRIO_CONF: &str = "etc/crio/crio.conf";

/// A temporary root directory holding host configuration files at their
/// standard locations, relative to [`TestHost::root`].
///
/// Nothing is created until a `write_*` method is called, so a fresh host
/// has every source missing.
///
/// # Example
///
/// ```rust,no_run
/// use reggie_test_utils::TestHost;
///
/// let host = TestHost::new();
/// host.write_daemon_json(r#"{"add-registry": ["docker.io"]}"#);
/// assert!(host.daemon_json().exists());
/// ```
pub struct TestHost {
    temp_dir: TempDir,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A host where every source exists and mentions no registries.
    pub fn with_empty_sources() -> Self {
        let host = Self::new();
        fs::create_dir_all(host.registries_d())
            .unwrap_or_else(|e| panic!("TestHost: failed to create registries.d: {e}"));
        host.write_sysconfig("");
        host.write_daemon_json("{}");
        host.write_crio_conf("[crio.image]\n");
        host
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn registries_d(&self) -> PathBuf {
        self.root().join(REGISTRIES_D)
    }

    pub fn sysconfig(&self) -> PathBuf {
        self.root().join(DOCKER_SYSCONFIG)
    }

    pub fn daemon_json(&self) -> PathBuf {
        self.root().join(DAEMON_JSON)
    }

    pub fn crio_conf(&self) -> PathBuf {
        self.root().join(CRIO_CONF)
    }

    /// Write `content` to `relative` under the root, creating parents.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("TestHost: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestHost: failed to write {}: {e}", path.display()));
        path
    }

    pub fn write_registries_d(&self, file_name: &str, content: &str) -> PathBuf {
        self.write(Path::new(REGISTRIES_D).join(file_name), content)
    }

    pub fn write_sysconfig(&self, content: &str) -> PathBuf {
        self.write(DOCKER_SYSCONFIG, content)
    }

    pub fn write_daemon_json(&self, content: &str) -> PathBuf {
        self.write(DAEMON_JSON, content)
    }

    pub fn write_crio_conf(&self, content: &str) -> PathBuf {
        self.write(CRIO_CONF, content)
    }

    /// Delete a file or directory under the root.
    pub fn remove(&self, relative: impl AsRef<Path>) {
        let path = self.root().join(relative);
        let result = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.unwrap_or_else(|e| panic!("TestHost: failed to remove {}: {e}", path.display()));
    }
}
