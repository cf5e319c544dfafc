//! Godot project and addon artifacts for gdpack.
//!
//! This crate understands the on-disk shapes the dependency engine works
//! against: `project.godot` and `plugin.cfg` files in Godot's config format
//! (edited raw-text-preservingly), `PackedStringArray` literals, addon
//! directory discovery, and upward project search. It implements the
//! artifact traits from `gdpack-core`.

pub mod addon;
pub mod document;
pub mod error;
pub mod packed;
pub mod project;

pub use addon::{Addon, ADDON_FILE};
pub use document::ConfigDocument;
pub use error::{Error, Result};
pub use project::{
    find_project_root, require_root_project, Project, ProjectLoader, GDPACK_SECTION, PROJECT_FILE,
};
