//! Shared test fixtures for the gdpack workspace.
//!
//! This crate builds throwaway Godot projects and git source repositories
//! for integration tests. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`project`] — [`TestProject`] builder for on-disk Godot project layouts
//! - [`git`] — git source repositories with tagged, installable history
//!
//! [`TestProject`]: project::TestProject

pub mod git;
pub mod project;
