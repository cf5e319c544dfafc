//! The `remove` command.

use std::path::Path;

use colored::Colorize;

use gdpack_core::DependencyManager;
use gdpack_project::{require_root_project, ProjectLoader};

use crate::commands::with_storage;
use crate::error::Result;
use crate::interactive::CliConfirm;

/// Remove each named dependency and its installed addon directory.
pub fn run_remove(path: &Path, addons: &[String], yes: bool) -> Result<()> {
    let mut project = require_root_project(path)?;
    let loader = ProjectLoader;
    let mut confirm = CliConfirm::new(yes);

    with_storage(|storage| {
        for name in addons {
            println!("{} Removing dependency: {}", "=>".blue().bold(), name.cyan());

            let mut manager =
                DependencyManager::new(&mut project, storage, &loader, &mut confirm);
            let removed_directory = manager.remove(name)?;
            project.refresh_addons()?;

            if removed_directory {
                println!(
                    "{} Removed {} and its addon directory.",
                    "OK".green().bold(),
                    name.cyan()
                );
            } else {
                println!("{} Removed {}.", "OK".green().bold(), name.cyan());
            }
        }
        Ok(())
    })
}
