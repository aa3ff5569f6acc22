//! Human-readable registry listing

use colored::Colorize;
use reggie_core::RegistryCatalog;

use crate::error::Result;

pub(crate) fn security_label(secure: Option<bool>) -> colored::ColoredString {
    match secure {
        Some(true) => "secure".green(),
        Some(false) => "insecure".red(),
        None => "unknown".dimmed(),
    }
}

pub fn render_list(catalog: &RegistryCatalog) -> String {
    let mut out = String::new();

    if catalog.is_empty() {
        out.push_str(&format!("{}\n", "No registries configured.".dimmed()));
        return out;
    }

    let width = catalog.iter().map(|(url, _)| url.len()).max().unwrap_or(0);

    out.push_str(&format!("{}\n\n", "Configured Registries".bold()));
    for (url, entry) in catalog.iter() {
        let signed = if entry.sigstore.is_some() { " signed" } else { "" };
        out.push_str(&format!(
            "  {:<width$}  {:<8}  {}{}\n",
            url.cyan(),
            security_label(entry.secure),
            entry.from_file.dimmed(),
            signed.yellow(),
            width = width,
        ));
    }
    out.push_str(&format!("\n{} {} registries\n", "Total:".dimmed(), catalog.len()));
    out
}

/// Run the list command
pub fn run_list(catalog: &RegistryCatalog) -> Result<()> {
    print!("{}", render_list(catalog));
    Ok(())
}
