//! In-memory collaborator fakes for engine tests.
//!
//! The fakes model a small universe of fetchable sources without touching
//! the network or (mostly) the filesystem: fetching a locator yields a
//! synthetic directory, and the loader maps those directories back to
//! prebuilt artifacts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use gdpack_core::{
    AddonInfo, Artifact, ArtifactLoader, Confirm, DefaultExport, Locator, Progress, Result,
    RootArtifact, Storage,
};

/// An in-memory artifact: dependencies, contained addons, explicit exports.
#[derive(Debug, Clone, Default)]
pub struct FakeArtifact {
    pub dependencies: Vec<Locator>,
    pub addons: Vec<AddonInfo>,
    pub exports: Vec<String>,
}

impl FakeArtifact {
    pub fn with_addon(mut self, name: &str, dependencies: Vec<Locator>) -> Self {
        self.addons.push(AddonInfo {
            name: name.to_string(),
            directory: PathBuf::from(format!("/fake/addons/{name}")),
            dependencies,
        });
        self
    }
}

impl Artifact for FakeArtifact {
    fn dependencies(&self) -> Vec<Locator> {
        self.dependencies.clone()
    }

    fn addon(&self, name: &str) -> Option<AddonInfo> {
        self.addons.iter().find(|a| a.name == name).cloned()
    }

    fn addon_names(&self) -> Vec<String> {
        self.addons.iter().map(|a| a.name.clone()).collect()
    }

    fn default_export(&self) -> DefaultExport {
        match self.exports.as_slice() {
            [] => match self.addons.as_slice() {
                [] => DefaultExport::None,
                [only] => DefaultExport::One(only.name.clone()),
                _ => DefaultExport::Many(self.addon_names()),
            },
            [only] => DefaultExport::One(only.clone()),
            _ => DefaultExport::Many(self.exports.clone()),
        }
    }
}

/// A mutable root artifact for manager tests, installing into a real
/// temporary directory so `remove` can exercise directory deletion.
#[derive(Debug, Clone, Default)]
pub struct FakeRoot {
    pub artifact: FakeArtifact,
    pub addons_dir: PathBuf,
    pub persist_count: usize,
}

impl Artifact for FakeRoot {
    fn dependencies(&self) -> Vec<Locator> {
        self.artifact.dependencies()
    }

    fn addon(&self, name: &str) -> Option<AddonInfo> {
        self.artifact.addon(name)
    }

    fn addon_names(&self) -> Vec<String> {
        self.artifact.addon_names()
    }

    fn default_export(&self) -> DefaultExport {
        self.artifact.default_export()
    }
}

impl RootArtifact for FakeRoot {
    fn dependency(&self, name: &str) -> Option<Locator> {
        self.artifact
            .dependencies
            .iter()
            .find(|l| l.name() == Some(name))
            .cloned()
    }

    fn set_dependency(&mut self, locator: Locator) {
        let name = locator.name().unwrap_or_default().to_string();
        match self
            .artifact
            .dependencies
            .iter_mut()
            .find(|l| l.name() == Some(name.as_str()))
        {
            Some(slot) => *slot = locator,
            None => self.artifact.dependencies.push(locator),
        }
    }

    fn remove_dependency(&mut self, name: &str) -> bool {
        let before = self.artifact.dependencies.len();
        self.artifact
            .dependencies
            .retain(|l| l.name() != Some(name));
        self.artifact.dependencies.len() != before
    }

    fn addons_directory(&self) -> PathBuf {
        self.addons_dir.clone()
    }

    fn persist(&mut self) -> Result<()> {
        self.persist_count += 1;
        Ok(())
    }
}

/// Storage over an in-memory universe of sources.
///
/// `fetch` maps `locator.source` to a synthetic `/fake/src/<source>`
/// directory and records the call; `copy_addon` records the request
/// without touching the filesystem.
#[derive(Debug, Default)]
pub struct FakeStorage {
    pub fetched: Vec<String>,
    pub copies: Vec<(PathBuf, PathBuf)>,
    pub cleaned: bool,
    pub events: Vec<Progress>,
}

pub fn fake_directory(source: &str) -> PathBuf {
    PathBuf::from(format!("/fake/src/{source}"))
}

impl Storage for FakeStorage {
    fn fetch(&mut self, locator: &Locator) -> Result<PathBuf> {
        self.fetched.push(locator.to_string());
        self.events
            .push(Progress::new("fetch", self.fetched.len() as u64, None));
        Ok(fake_directory(&locator.source))
    }

    fn copy_addon(&mut self, from: &Path, to: &Path) -> Result<()> {
        self.copies.push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.cleaned = true;
        Ok(())
    }
}

/// Loader over the same universe: maps fake directories to artifacts.
/// Unknown directories are not artifacts (`Ok(None)`).
#[derive(Debug, Clone, Default)]
pub struct FakeLoader {
    pub artifacts: HashMap<PathBuf, FakeArtifact>,
}

impl FakeLoader {
    /// Register the artifact served for `source`.
    pub fn insert(&mut self, source: &str, artifact: FakeArtifact) {
        self.artifacts.insert(fake_directory(source), artifact);
    }
}

impl ArtifactLoader for FakeLoader {
    type Artifact = FakeArtifact;

    fn load(&self, directory: &Path) -> Result<Option<FakeArtifact>> {
        Ok(self.artifacts.get(directory).cloned())
    }
}

/// Confirmation fake with a scripted answer; records every prompt.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    pub answer: bool,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answer)
    }
}

