//! The `add` command.

use std::path::Path;

use colored::Colorize;

use gdpack_core::{AddOptions, DependencyManager, Locator};
use gdpack_project::{require_root_project, ProjectLoader};

use crate::commands::with_storage;
use crate::error::Result;
use crate::interactive::CliConfirm;

/// Add each locator as a project dependency, installing unless asked not to.
pub fn run_add(
    path: &Path,
    locators: &[String],
    yes: bool,
    no_install: bool,
    no_persist: bool,
) -> Result<()> {
    let mut project = require_root_project(path)?;
    let loader = ProjectLoader;
    let mut confirm = CliConfirm::new(yes);
    let options = AddOptions {
        no_install,
        no_persist,
    };

    with_storage(|storage| {
        for raw in locators {
            let locator = Locator::parse(raw)?;
            println!("{} Adding dependency: {}", "=>".blue().bold(), raw.cyan());

            let mut manager =
                DependencyManager::new(&mut project, storage, &loader, &mut confirm);
            match manager.add(locator, options)? {
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
