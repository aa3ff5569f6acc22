//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// reggie - Show the container registries configured on this host
#[derive(Parser, Debug)]
#[command(name = "reggie")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// The command to run (defaults to `json`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where to read registry configuration from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Read source paths from a TOML, JSON or YAML file
    #[arg(long, global = true, env = "REGGIE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resolve the default paths under this directory instead of `/`
    #[arg(long, global = true, env = "REGGIE_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory of per-registry YAML documents
    #[arg(long, global = true, env = "REGGIE_REGISTRIES_D", value_name = "DIR")]
    pub registries_d: Option<PathBuf>,

    /// Docker sysconfig file
    #[arg(long, global = true, env = "REGGIE_SYSCONFIG", value_name = "FILE")]
    pub sysconfig: Option<PathBuf>,

    /// Docker daemon.json file
    #[arg(long, global = true, env = "REGGIE_DAEMON_JSON", value_name = "FILE")]
    pub daemon_json: Option<PathBuf>,

    /// cri-o configuration file
    #[arg(long, global = true, env = "REGGIE_CRIO_CONF", value_name = "FILE")]
    pub crio_conf: Option<PathBuf>,

    /// Treat missing source files as empty instead of failing
    #[arg(long, global = true)]
    pub skip_missing: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the catalog as JSON
    Json,

    /// Print the catalog as YAML
    Yaml,

    /// List registries with their security and origin
    List,

    /// Show a single registry
    ///
    /// Examples:
    ///   reggie show quay.io
    ///   reggie show registry.example.com:5000
    Show {
        /// Registry URL (host[:port])
        url: String,
    },
}
