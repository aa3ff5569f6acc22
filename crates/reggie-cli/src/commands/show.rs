//! Details for a single registry

use colored::Colorize;
use reggie_core::{RegistryCatalog, RegistryEntry};

use super::list::security_label;
use crate::error::{CliError, Result};

pub fn render_entry(entry: &RegistryEntry) -> String {
    let optional = |value: &Option<String>| match value {
        Some(v) => v.normal(),
        None => "-".dimmed(),
    };

    format!(
        "{}\n  {:<17} {}\n  {:<17} {}\n  {:<17} {}\n  {:<17} {}\n",
        entry.url.cyan().bold(),
        "security:",
        security_label(entry.secure),
        "from file:",
        entry.from_file,
        "sigstore:",
        optional(&entry.sigstore),
        "sigstore staging:",
        optional(&entry.sigstore_staging),
    )
}

/// Run the show command
pub fn run_show(catalog: &RegistryCatalog, url: &str) -> Result<()> {
    let entry = catalog
        .get(url)
        .ok_or_else(|| CliError::user(format!("Registry '{url}' is not configured on this host")))?;
    print!("{}", render_entry(entry));
    Ok(())
}
