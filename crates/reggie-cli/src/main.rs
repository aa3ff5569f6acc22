//! reggie CLI
//!
//! Prints the container registries configured on a host, merged from
//! registries.d, the docker sysconfig file, daemon.json and crio.conf.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use reggie_core::RegistryCatalog;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} failed to initialise logging: {}", "warning:".yellow().bold(), e);
    }

    let config = context::resolve_config(&cli.sources)?;
    let catalog = RegistryCatalog::load(&config)?;

    execute_command(cli.command.unwrap_or(Commands::Json), &catalog)
}

fn execute_command(cmd: Commands, catalog: &RegistryCatalog) -> Result<()> {
    match cmd {
        Commands::Json => commands::run_json(catalog),
        Commands::Yaml => commands::run_yaml(catalog),
        Commands::List => commands::run_list(catalog),
        Commands::Show { url } => commands::run_show(catalog, &url),
    }
}
