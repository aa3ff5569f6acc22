//! Filesystem layer for reggie
//!
//! Reads host configuration files and decodes them as TOML, JSON or YAML.

pub mod config;
pub mod error;
pub mod format;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use format::Format;
