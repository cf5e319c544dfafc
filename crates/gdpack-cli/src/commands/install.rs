//! The `install` command.

use std::path::Path;

use colored::Colorize;

use gdpack_core::{DependencyManager, Edge};
use gdpack_project::{require_root_project, ProjectLoader};

use crate::commands::with_storage;
use crate::error::Result;
use crate::interactive::CliConfirm;

/// Install every resolved dependency that is not yet on disk.
pub fn run_install(path: &Path, yes: bool) -> Result<()> {
    let mut project = require_root_project(path)?;
    let loader = ProjectLoader;
    let mut confirm = CliConfirm::new(yes);

    with_storage(|storage| {
        let mut report = |edge: &Edge, resolved: usize, queued: usize| {
            println!(
                "{} Resolving {} ({} resolved, {} queued)",
                "=>".blue().bold(),
                edge.locator.to_string().cyan(),
                resolved,
                queued
            );
        };

        let mut manager = DependencyManager::new(&mut project, storage, &loader, &mut confirm);
        let installed = manager.install_with(Some(&mut report))?;

        if installed.is_empty() {
            println!("{} Everything is up to date.", "OK".green().bold());
        } else {
            for locator in &installed {
                println!(
                    "{} Installed {}.",
                    "OK".green().bold(),
                    locator.to_string().cyan()
                );
            }
        }
        Ok(())
    })
}
