//! The `addon-add` command.

use std::path::Path;

use colored::Colorize;

use gdpack_core::{AddOptions, DependencyManager, Locator};
use gdpack_project::{require_root_project, ProjectLoader};

use crate::commands::with_storage;
use crate::error::{CliError, Result};
use crate::interactive::CliConfirm;

/// Add dependencies to an addon's own plugin.cfg and install them as
/// siblings under the project's addons directory.
pub fn run_addon_add(path: &Path, addon_name: &str, locators: &[String], yes: bool) -> Result<()> {
    let project = require_root_project(path)?;
    let Some(addon) = project.addons.get(addon_name) else {
        return Err(CliError::user(format!(
            "addon '{addon_name}' is not present in this project"
        )));
    };
    let mut addon = addon.clone();

    let loader = ProjectLoader;
    let mut confirm = CliConfirm::new(yes);

    with_storage(|storage| {
        for raw in locators {
            let locator = Locator::parse(raw)?;
            println!(
                "{} Adding {} to addon {}",
                "=>".blue().bold(),
                raw.cyan(),
                addon_name.cyan()
            );

            let mut manager = DependencyManager::new(&mut addon, storage, &loader, &mut confirm);
            match manager.add(locator, AddOptions::default())? {
                Some(recorded) => println!(
                    "{} Added {}.",
                    "OK".green().bold(),
                    recorded.to_string().cyan()
                ),
                None => println!("{} Kept the existing dependency.", "OK".green().bold()),
            }
        }
        Ok(())
    })
}
