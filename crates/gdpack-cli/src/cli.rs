//! CLI argument parsing using clap derive.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// gdpack - Manage Godot addon dependencies
#[derive(Parser, Debug)]
#[command(name = "gdpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer every confirmation with its default instead of prompting
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add dependencies to the project
    ///
    /// A locator is `[name@]source[@version]`. The source is a git URL or
    /// local path; when the name is omitted the source's default export is
    /// used, and a missing version means the source's latest state.
    ///
    /// Examples:
    ///   gdpack add ui@https://example.com/ui.git@1.2.0
    ///   gdpack add https://example.com/ui.git
    #[command(visible_alias = "a")]
    Add {
        /// Dependency locators to add
        #[arg(required = true)]
        locators: Vec<String>,

        /// Record and validate the dependency without installing addons
        #[arg(long)]
        no_install: bool,

        /// Do not write the change back to project.godot
        #[arg(long)]
        no_persist: bool,
    },

    /// Remove dependencies and their installed addons
    #[command(visible_alias = "rm")]
    Remove {
        /// Addon names to remove
        #[arg(required = true)]
        addons: Vec<String>,
    },

    /// Install every declared dependency that is not yet on disk
    #[command(visible_alias = "i")]
    Install,

    /// Show the resolved dependency tree
    #[command(visible_alias = "tr")]
    Tree,

    /// Mark addons as the project's exports, usable as dependency defaults
    #[command(visible_alias = "ex")]
    Export {
        /// Addon names to export
        #[arg(required = true)]
        addons: Vec<String>,
    },

    /// Add dependencies to an addon's plugin.cfg, then reinstall
    #[command(name = "addon-add", visible_alias = "aa")]
    AddonAdd {
        /// The addon to modify
        addon: String,

        /// Dependency locators to add to the addon
        #[arg(required = true)]
        locators: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
