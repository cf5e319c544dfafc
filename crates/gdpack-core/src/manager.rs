//! The dependency manager: `add`, `remove`, and `install` against a root
//! artifact.
//!
//! Orchestrates the resolver and the reconciler together with the injected
//! storage, loader, and confirmation collaborators. Failure semantics: a
//! [`ConflictError`](crate::reconcile::ConflictError) propagates unhandled
//! out of `add`/`install`, and addon directories copied before a failure are
//! not rolled back.

use crate::artifact::{Artifact, ArtifactLoader, DefaultExport, RootArtifact};
use crate::confirm::Confirm;
use crate::error::{Error, Result};
use crate::graph::{Graph, ResolveProgress};
use crate::locator::Locator;
use crate::storage::Storage;

/// Options for [`DependencyManager::add`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// Validate the graph instead of installing after the dependency is
    /// recorded.
    pub no_install: bool,
    /// Do not persist the root artifact afterwards.
    pub no_persist: bool,
}

/// Orchestrates dependency operations against a project or addon artifact.
pub struct DependencyManager<'a, P, S, L, C>
where
    P: RootArtifact,
    S: Storage,
    L: ArtifactLoader,
    C: Confirm,
{
    root: &'a mut P,
    storage: &'a mut S,
    loader: &'a L,
    confirm: &'a mut C,
}

impl<'a, P, S, L, C> DependencyManager<'a, P, S, L, C>
where
    P: RootArtifact,
    S: Storage,
    L: ArtifactLoader,
    C: Confirm,
{
    pub fn new(root: &'a mut P, storage: &'a mut S, loader: &'a L, confirm: &'a mut C) -> Self {
        Self {
            root,
            storage,
            loader,
            confirm,
        }
    }

    /// Add `locator` as a dependency of the root artifact.
    ///
    /// An unnamed locator is fetched once and completed from the source's
    /// default export; a missing version defaults to `latest`. If the root
    /// already declares a different dependency for the same addon, the
    /// injected confirmation decides whether it is overwritten.
    ///
    /// Returns the recorded locator, or `None` when the user declined the
    /// overwrite and nothing changed.
    pub fn add(&mut self, locator: Locator, options: AddOptions) -> Result<Option<Locator>> {
        let mut locator = locator;
        if locator.version.is_none() {
            locator.version = Some("latest".to_string());
        }

        if locator.name.is_none() {
            let name = self.resolve_default_addon(&locator)?;
            tracing::info!(addon = %name, source = %locator.source, "defaulted to addon");
            locator.name = Some(name);
        }

        let name = locator.name.clone().unwrap_or_default();
        let overwrite = match self.root.dependency(&name) {
            None => true,
            Some(current) if current.to_string() == locator.to_string() => true,
            Some(current) => self.confirm.confirm(
                &format!("addon \"{name}\" is already present as \"{current}\"; overwrite?"),
                true,
            )?,
        };

        if overwrite {
            self.root.set_dependency(locator.clone());
        }

        if options.no_install {
            // Still validate the graph the new dependency produces.
            let graph = Graph::resolve(&*self.root, self.storage, self.loader, None)?;
            graph.flatten()?;
        } else {
            self.install()?;
        }

        if !options.no_persist {
            self.root.persist()?;
        }

        Ok(overwrite.then_some(locator))
    }

    /// Remove the dependency `name` from the root artifact.
    ///
    /// `name` must be a declared dependency; an undeclared addon that is
    /// present on disk can still be removed after confirmation. Returns
    /// whether an on-disk directory was deleted.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let declared = self.root.dependency(name).is_some();
        let present = self.root.addon(name).is_some();

        if !declared && !present {
            return Err(Error::UnknownDependency {
                name: name.to_string(),
            });
        }

        if !declared {
            let prompt = format!(
                "addon \"{name}\" is present in the project but not as a dependency; remove anyway?"
            );
            if !self.confirm.confirm(&prompt, false)? {
                return Err(Error::Declined { prompt });
            }
        }

        self.root.remove_dependency(name);

        let directory = self.root.addons_directory().join(name);
        let mut removed_directory = false;
        if directory.is_dir() {
            tracing::info!(directory = %directory.display(), "removing addon from disk");
            std::fs::remove_dir_all(&directory).map_err(|e| Error::io(&directory, e))?;
            removed_directory = true;
        }

        self.root.persist()?;
        Ok(removed_directory)
    }

    /// Install every resolved dependency whose addon is not yet on disk.
    ///
    /// Returns the locators that were installed. Addons already present in
    /// the root artifact are never re-fetched.
    pub fn install(&mut self) -> Result<Vec<Locator>> {
        self.install_with(None)
    }

    /// [`install`](Self::install) with a resolution progress callback.
    pub fn install_with(&mut self, progress: Option<ResolveProgress<'_>>) -> Result<Vec<Locator>> {
        let graph = Graph::resolve(&*self.root, self.storage, self.loader, progress)?;

        if graph.is_empty() {
            tracing::info!("no dependencies to install");
            return Ok(Vec::new());
        }

        tracing::info!(count = graph.len(), "resolved dependencies");

        let to_install: Vec<Locator> = graph
            .flatten()?
            .into_iter()
            .filter(|locator| {
                self.root
                    .addon(locator.name().unwrap_or_default())
                    .is_none()
            })
            .collect();

        tracing::info!(count = to_install.len(), "addons to install");

        for (index, locator) in to_install.iter().enumerate() {
            tracing::info!(
                locator = %locator,
                "installing addon ({}/{})",
                index + 1,
                to_install.len()
            );

            let directory = self.storage.fetch(locator)?;
            let artifact = self
                .loader
                .load(&directory)?
                .ok_or(Error::NotAnArtifact { path: directory })?;

            let name = locator.name().unwrap_or_default();
            let addon = artifact
                .addon(name)
                .ok_or_else(|| Error::MissingAddon {
                    name: name.to_string(),
                    src: locator.source.clone(),
                })?;

            let destination = self.root.addons_directory().join(name);
            self.storage.copy_addon(&addon.directory, &destination)?;
        }

        Ok(to_install)
    }

    /// Fetch an unnamed locator and pick the source's single default addon.
    fn resolve_default_addon(&mut self, locator: &Locator) -> Result<String> {
        let directory = self.storage.fetch(locator)?;
        let artifact = self
            .loader
            .load(&directory)?
            .ok_or(Error::NotAnArtifact { path: directory })?;

        match artifact.default_export() {
            DefaultExport::One(name) => Ok(name),
            DefaultExport::None => Err(Error::NoDefaultAddon {
                src: locator.source.clone(),
            }),
            DefaultExport::Many(candidates) => Err(Error::AmbiguousDefaultAddon {
                src: locator.source.clone(),
                candidates,
            }),
        }
    }
}
