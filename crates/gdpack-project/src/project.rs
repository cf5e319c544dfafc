//! Godot projects: the root artifacts gdpack operates on.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use gdpack_core::{AddonInfo, Artifact, ArtifactLoader, DefaultExport, Locator, RootArtifact};

use crate::addon::Addon;
use crate::document::ConfigDocument;
use crate::error::{Error, Result};
use crate::packed;

/// Marker file that makes a directory a Godot project.
pub const PROJECT_FILE: &str = "project.godot";

/// Section of `project.godot` owned by gdpack.
pub const GDPACK_SECTION: &str = "gdpack";

/// A Godot project directory layout.
#[derive(Debug, Clone)]
pub struct Project {
    /// Project directory.
    pub directory: PathBuf,
    /// Path to `project.godot`.
    pub file: PathBuf,
    /// Declared dependencies, in declaration order, names always set.
    pub dependencies: Vec<Locator>,
    /// Addons marked as depend-able-upon by other projects.
    pub exports: Vec<String>,
    /// Addons found under `addons/`, keyed by name.
    pub addons: BTreeMap<String, Addon>,
    /// Raw project settings, preserved for persisting.
    document: ConfigDocument,
}

impl Project {
    /// Read the project at `directory`, or `Ok(None)` if it carries no
    /// `project.godot`.
    pub fn explore(directory: &Path) -> Result<Option<Self>> {
        let file = directory.join(PROJECT_FILE);
        if !file.is_file() {
            return Ok(None);
        }

        let text = fs::read_to_string(&file).map_err(|e| Error::io(&file, e))?;
        let document = ConfigDocument::parse(&text);

        let exports = document
            .get(Some(GDPACK_SECTION), "exports")
            .and_then(packed::parse)
            .unwrap_or_default();

        let mut dependencies = Vec::new();
        let declared = document
            .get(Some(GDPACK_SECTION), "dependencies")
            .and_then(packed::parse)
            .unwrap_or_default();
        for entry in declared {
            let locator = Locator::parse(&entry)?;
            if locator.name.is_none() {
                return Err(Error::UnnamedDependency {
                    locator: entry,
                    file: file.clone(),
                });
            }
            dependencies.push(locator);
        }

        let mut project = Self {
            directory: directory.to_path_buf(),
            file,
            dependencies,
            exports,
            addons: BTreeMap::new(),
            document,
        };
        project.addons = project.discover_addons()?;

        Ok(Some(project))
    }

    /// Directory addons are installed into.
    pub fn addons_dir(&self) -> PathBuf {
        self.directory.join("addons")
    }

    /// Scan `addons/` for plugin directories. A missing `addons/` directory
    /// simply means no addons yet.
    fn discover_addons(&self) -> Result<BTreeMap<String, Addon>> {
        let addons_dir = self.addons_dir();
        if !addons_dir.is_dir() {
            return Ok(BTreeMap::new());
        }

        let entries = fs::read_dir(&addons_dir).map_err(|e| Error::io(&addons_dir, e))?;
        let mut addons = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&addons_dir, e))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            match Addon::explore(&path)? {
                Some(addon) => {
                    addons.insert(addon.name.clone(), addon);
                }
                None => {
                    tracing::debug!(path = %path.display(), "skipping directory without a plugin.cfg");
                }
            }
        }

        Ok(addons)
    }

    /// Re-scan the on-disk addon set, e.g. after an install pass.
    pub fn refresh_addons(&mut self) -> Result<()> {
        self.addons = self.discover_addons()?;
        Ok(())
    }

    /// Write the gdpack-owned keys back to `project.godot`, leaving every
    /// other line untouched.
    pub fn save(&mut self) -> Result<()> {
        let dependencies: Vec<String> =
            self.dependencies.iter().map(ToString::to_string).collect();
        self.document
            .set(Some(GDPACK_SECTION), "dependencies", &packed::stringify(&dependencies));

        if self.exports.is_empty() {
            self.document.remove(Some(GDPACK_SECTION), "exports");
        } else {
            self.document
                .set(Some(GDPACK_SECTION), "exports", &packed::stringify(&self.exports));
        }

        fs::write(&self.file, self.document.to_string()).map_err(|e| Error::io(&self.file, e))
    }
}

impl Artifact for Project {
    fn dependencies(&self) -> Vec<Locator> {
        self.dependencies.clone()
    }

    fn addon(&self, name: &str) -> Option<AddonInfo> {
        self.addons.get(name).map(Addon::info)
    }

    fn addon_names(&self) -> Vec<String> {
        self.addons.keys().cloned().collect()
    }

    fn default_export(&self) -> DefaultExport {
        match self.exports.as_slice() {
            [only] => DefaultExport::One(only.clone()),
            [] => match self.addon_names().as_slice() {
                [] => DefaultExport::None,
                [only] => DefaultExport::One(only.clone()),
                many => DefaultExport::Many(many.to_vec()),
            },
            many => DefaultExport::Many(many.to_vec()),
        }
    }
}

impl RootArtifact for Project {
    fn dependency(&self, name: &str) -> Option<Locator> {
        self.dependencies
            .iter()
            .find(|l| l.name() == Some(name))
            .cloned()
    }

    fn set_dependency(&mut self, locator: Locator) {
        let name = locator.name().unwrap_or_default().to_string();
        match self
            .dependencies
            .iter_mut()
            .find(|l| l.name() == Some(name.as_str()))
        {
            Some(slot) => *slot = locator,
            None => self.dependencies.push(locator),
        }
    }

    fn remove_dependency(&mut self, name: &str) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|l| l.name() != Some(name));
        self.dependencies.len() != before
    }

    fn addons_directory(&self) -> PathBuf {
        self.addons_dir()
    }

    fn persist(&mut self) -> gdpack_core::Result<()> {
        self.save().map_err(gdpack_core::Error::collaborator)
    }
}

/// Loads fetched directories as projects during graph traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectLoader;

impl ArtifactLoader for ProjectLoader {
    type Artifact = Project;

    fn load(&self, directory: &Path) -> gdpack_core::Result<Option<Project>> {
        Project::explore(directory).map_err(gdpack_core::Error::collaborator)
    }
}

/// Find the nearest ancestor directory (including `start` itself) holding a
/// `project.godot`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut at = start;
    loop {
        if at.join(PROJECT_FILE).is_file() {
            return Some(at.to_path_buf());
        }
        at = at.parent()?;
    }
}

/// Load the project containing `start`, searching upwards.
pub fn require_root_project(start: &Path) -> Result<Project> {
    let root = find_project_root(start).ok_or_else(|| Error::NoProject {
        path: start.to_path_buf(),
    })?;

    Project::explore(&root)?.ok_or(Error::NoProject { path: root })
}
