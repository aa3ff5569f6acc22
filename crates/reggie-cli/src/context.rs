//! Resolution of catalog settings from defaults, config file and flags
//!
//! Precedence, lowest first: built-in defaults, `--config` file, `--root`
//! re-basing, then the per-source path flags, which are used verbatim.

use reggie_core::{CatalogConfig, MissingPolicy};

use crate::cli::SourceArgs;
use crate::error::Result;

pub fn resolve_config(args: &SourceArgs) -> Result<CatalogConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path.display());
            CatalogConfig::load(path)?
        }
        None => CatalogConfig::default(),
    };

    if let Some(root) = &args.root {
        config = config.with_root(root);
    }
    if let Some(path) = &args.registries_d {
        config.registries_d = path.clone();
    }
    if let Some(path) = &args.sysconfig {
        config.docker_sysconfig = path.clone();
    }
    if let Some(path) = &args.daemon_json {
        config.daemon_json = path.clone();
    }
    if let Some(path) = &args.crio_conf {
        config.crio_conf = path.clone();
    }
    if args.skip_missing {
        config.missing = MissingPolicy::Skip;
    }

    tracing::debug!(?config, "Resolved catalog settings");
    Ok(config)
}
