//! Addons: self-contained plugin directories carrying a `plugin.cfg`.

use std::fs;
use std::path::{Path, PathBuf};

use gdpack_core::{AddonInfo, Artifact, DefaultExport, Locator, RootArtifact};

use crate::document::ConfigDocument;
use crate::error::{Error, Result};
use crate::packed;

/// Marker file that makes a directory an addon.
pub const ADDON_FILE: &str = "plugin.cfg";

/// Section of `plugin.cfg` holding the addon's own dependencies, one entry
/// per addon: `name="name@source@version"`.
const DEPENDENCIES_SECTION: &str = "dependencies";

/// An addon on the file system.
///
/// The addon's name is its directory name; the `name` field inside
/// `plugin.cfg` is display metadata and does not participate in identity.
#[derive(Debug, Clone)]
pub struct Addon {
    /// Addon name (directory basename).
    pub name: String,
    /// Addon directory.
    pub directory: PathBuf,
    /// Path to the addon's `plugin.cfg`.
    pub file: PathBuf,
    /// Declared dependencies, in file order, names always set.
    pub dependencies: Vec<Locator>,
    /// Raw config data, preserved for persisting.
    document: ConfigDocument,
}

impl Addon {
    /// Read the addon at `directory`, or `Ok(None)` if it carries no
    /// `plugin.cfg`.
    pub fn explore(directory: &Path) -> Result<Option<Self>> {
        let file = directory.join(ADDON_FILE);
        if !file.is_file() {
            return Ok(None);
        }

        let text = fs::read_to_string(&file).map_err(|e| Error::io(&file, e))?;
        let document = ConfigDocument::parse(&text);

        let mut dependencies = Vec::new();
        for (key, value) in document.entries(Some(DEPENDENCIES_SECTION)) {
            let mut locator = Locator::parse(packed::unquote(value))?;
            // The entry key is authoritative for the addon name.
            locator.name = Some(key.to_string());
            dependencies.push(locator);
        }

        let name = directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Some(Self {
            name,
            directory: directory.to_path_buf(),
            file,
            dependencies,
            document,
        }))
    }

    /// Write the dependency entries back to `plugin.cfg`, leaving every
    /// other line untouched.
    pub fn save(&mut self) -> Result<()> {
        for locator in &self.dependencies {
            let name = locator.name().unwrap_or_default();
            self.document.set(
                Some(DEPENDENCIES_SECTION),
                name,
                &packed::quote(&locator.to_string()),
            );
        }

        fs::write(&self.file, self.document.to_string()).map_err(|e| Error::io(&self.file, e))
    }

    /// The addon as the resolver sees it.
    pub fn info(&self) -> AddonInfo {
        AddonInfo {
            name: self.name.clone(),
            directory: self.directory.clone(),
            dependencies: self.dependencies.clone(),
        }
    }
}

impl Artifact for Addon {
    fn dependencies(&self) -> Vec<Locator> {
        self.dependencies.clone()
    }

    fn addon(&self, _name: &str) -> Option<AddonInfo> {
        None
    }

    fn addon_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn default_export(&self) -> DefaultExport {
        DefaultExport::None
    }
}

impl RootArtifact for Addon {
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
        self.document.remove(Some(DEPENDENCIES_SECTION), name);
        self.dependencies.len() != before
    }

    fn addons_directory(&self) -> PathBuf {
        // Sibling addons live next to this one.
        self.directory
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.directory.clone())
    }

    fn persist(&mut self) -> gdpack_core::Result<()> {
        self.save().map_err(gdpack_core::Error::collaborator)
    }
}
