//! gdpack CLI
//!
//! The command-line interface for managing Godot addon dependencies.

mod cli;
mod commands;
mod error;
mod interactive;
mod progress;

use std::io;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        render_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.yes),
        None => {
            println!("{} Godot addon dependency manager", "gdpack".green().bold());
            println!();
            println!("Run {} for available commands.", "gdpack --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, yes: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;

    match cmd {
        Commands::Add {
            locators,
            no_install,
            no_persist,
        } => commands::run_add(&cwd, &locators, yes, no_install, no_persist),
        Commands::Remove { addons } => commands::run_remove(&cwd, &addons, yes),
        Commands::Install => commands::run_install(&cwd, yes),
        Commands::Tree => commands::run_tree(&cwd),
        Commands::Export { addons } => commands::run_export(&cwd, &addons),
        Commands::AddonAdd { addon, locators } => {
            commands::run_addon_add(&cwd, &addon, &locators, yes)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Print an error report. Conflicts get a per-addon breakdown with every
/// offending dependency path.
fn render_error(error: &CliError) {
    eprintln!("{}: {}", "error".red().bold(), error);

    if let CliError::Core(gdpack_core::Error::Conflicts(conflicts)) = error {
        for (name, conflict) in &conflicts.conflicts {
            eprintln!(
                "  {} {} ({})",
                "x".red().bold(),
                name.cyan(),
                conflict.reason
            );
            for edge in &conflict.edges {
                eprintln!("      {}", edge.route().dimmed());
            }
        }
    }
}
