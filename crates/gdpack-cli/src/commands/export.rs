//! The `export` command.

use std::path::Path;

use colored::Colorize;

use gdpack_project::require_root_project;

use crate::error::{CliError, Result};

/// Mark addons as exported by this project.
///
/// Exported addons are what other projects get when they depend on this
/// project's source without naming an addon.
pub fn run_export(path: &Path, addons: &[String]) -> Result<()> {
    let mut project = require_root_project(path)?;

    for name in addons {
        if !project.addons.contains_key(name) {
            return Err(CliError::user(format!(
                "addon '{name}' is not present in this project"
            )));
        }

        if project.exports.iter().any(|export| export == name) {
            println!(
                "{} Addon {} is already exported.",
                "OK".green().bold(),
                name.cyan()
            );
        } else {
            project.exports.push(name.clone());
            println!("{} Exported {}.", "OK".green().bold(), name.cyan());
        }
    }

    project.save()?;
    Ok(())
}
