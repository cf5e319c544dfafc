//! The `tree` command.

use std::path::Path;

use colored::Colorize;

use gdpack_core::Graph;
use gdpack_project::{require_root_project, ProjectLoader};

use crate::commands::with_storage;
use crate::error::Result;

/// Render the resolved dependency graph as an indented tree.
pub fn run_tree(path: &Path) -> Result<()> {
    let project = require_root_project(path)?;

    with_storage(|storage| {
        let graph = Graph::resolve(&project, storage, &ProjectLoader, None)?;

        let name = project
            .directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string());
        println!("{}", name.green().bold());

        if graph.is_empty() {
            println!("  {}", "(no dependencies)".dimmed());
            return Ok(());
        }

        for edge in &graph.edges {
            let indent = "  ".repeat(edge.depth() + 1);
            println!(
                "{indent}{} {}",
                "-".dimmed(),
                edge.locator.to_string().cyan()
            );
        }
        Ok(())
    })
}
