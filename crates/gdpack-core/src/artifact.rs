//! Collaborator traits for artifacts.
//!
//! An *artifact* is anything that can declare dependencies: a project or an
//! addon. The resolver and the dependency manager only see these traits; the
//! on-disk Godot formats live in `gdpack-project`.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::locator::Locator;

/// A declared addon inside an artifact, as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonInfo {
    /// Addon name; matches its directory name.
    pub name: String,
    /// Absolute directory of the addon's files.
    pub directory: PathBuf,
    /// The addon's own declared dependencies, in declaration order.
    pub dependencies: Vec<Locator>,
}

/// Outcome of resolving an artifact's default addon.
///
/// Used when a dependency is added by bare source, without naming the addon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultExport {
    /// Exactly one candidate; use it.
    One(String),
    /// The artifact exposes no addons at all.
    None,
    /// Several candidates and no explicit choice.
    Many(Vec<String>),
}

/// Read-only view of an artifact.
///
/// Declared dependencies always carry a name by the time they are returned
/// from [`Artifact::dependencies`]; unnamed locators only exist transiently
/// while a default addon is being resolved.
pub trait Artifact {
    /// Declared dependencies, in declaration order.
    fn dependencies(&self) -> Vec<Locator>;

    /// Look up an addon this artifact contains.
    fn addon(&self, name: &str) -> Option<AddonInfo>;

    /// Names of all addons this artifact contains.
    fn addon_names(&self) -> Vec<String>;

    /// Resolve the artifact's default addon.
    fn default_export(&self) -> DefaultExport;
}

/// An artifact that can be mutated and persisted: the root a command
/// operates on (a project, or an addon for `addon-add`).
pub trait RootArtifact: Artifact {
    /// The declared dependency for `name`, if any.
    fn dependency(&self, name: &str) -> Option<Locator>;

    /// Insert or replace the declared dependency matching `locator.name`.
    fn set_dependency(&mut self, locator: Locator);

    /// Remove the declared dependency for `name`. Returns whether an entry
    /// was removed.
    fn remove_dependency(&mut self, name: &str) -> bool;

    /// Directory addons are installed into.
    fn addons_directory(&self) -> PathBuf;

    /// Write pending changes back to disk, preserving unrelated content.
    fn persist(&mut self) -> Result<()>;
}

/// Parses fetched directories into artifacts.
///
/// `Ok(None)` means the directory is not a recognizable artifact. During
/// graph traversal that is a recoverable condition; where an artifact is
/// required, the caller turns it into a fatal error.
pub trait ArtifactLoader {
    type Artifact: Artifact;

    fn load(&self, directory: &Path) -> Result<Option<Self::Artifact>>;
}
