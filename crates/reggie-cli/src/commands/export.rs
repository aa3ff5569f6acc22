//! Structured dumps of the catalog projection

use reggie_core::RegistryCatalog;

use crate::error::Result;

pub fn render_json(catalog: &RegistryCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(&catalog.to_projection())?)
}

pub fn render_yaml(catalog: &RegistryCatalog) -> Result<String> {
    Ok(serde_yaml::to_string(&catalog.to_projection())?)
}

/// Run the json command
pub fn run_json(catalog: &RegistryCatalog) -> Result<()> {
    println!("{}", render_json(catalog)?);
    Ok(())
}

/// Run the yaml command
pub fn run_yaml(catalog: &RegistryCatalog) -> Result<()> {
    print!("{}", render_yaml(catalog)?);
    Ok(())
}
