//! Transitive dependency graph resolution.
//!
//! [`Graph::resolve`] walks the dependency graph from a root artifact,
//! fetching and inspecting every transitive artifact it encounters. The
//! result is an ordered list of discovered [`Edge`]s (a tree, by discovery
//! order), rebuilt fresh on every resolution and never persisted.

use std::collections::HashSet;

use crate::artifact::{Artifact, ArtifactLoader};
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::storage::Storage;

/// A discovered dependency instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Ancestor locators from the root down to this edge's parent; empty
    /// for a root-declared dependency.
    pub path: Vec<Locator>,
    /// The locator this edge represents.
    pub locator: Locator,
}

impl Edge {
    /// An edge declared directly by the root artifact.
    pub fn root(locator: Locator) -> Self {
        Self {
            path: Vec::new(),
            locator,
        }
    }

    /// An edge declared by the artifact behind `parent`.
    pub fn child_of(parent: &Edge, locator: Locator) -> Self {
        let mut path = parent.path.clone();
        path.push(parent.locator.clone());
        Self { path, locator }
    }

    /// The full discovery route, for diagnostics: every ancestor locator
    /// followed by this edge's own.
    pub fn route(&self) -> String {
        self.path
            .iter()
            .chain(std::iter::once(&self.locator))
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Discovery depth: 0 for root-declared dependencies.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Callback invoked once per popped edge with the current visited and
/// remaining counts. Purely observational: it cannot alter or cancel the
/// traversal.
pub type ResolveProgress<'a> = &'a mut dyn FnMut(&Edge, usize, usize);

/// The result of one resolution pass: discovered edges, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Resolve the dependency graph of `root`.
    ///
    /// Traversal is depth-first over an explicit work stack seeded with the
    /// root's declared dependencies. Each popped edge is appended to the
    /// graph before its artifact is fetched, so partially-unresolvable edges
    /// still show up for later diagnostics. Directories that fetch fine but
    /// are not recognizable artifacts are logged and skipped without
    /// expanding children; a fetched artifact that lacks the addon named by
    /// the locator is fatal.
    ///
    /// The visited set is keyed by the stringified locator, so value-equal
    /// locators reached via different paths are expanded only once. Cycles
    /// terminate through that same set.
    pub fn resolve<S, L>(
        root: &dyn Artifact,
        storage: &mut S,
        loader: &L,
        mut progress: Option<ResolveProgress<'_>>,
    ) -> Result<Self>
    where
        S: Storage,
        L: ArtifactLoader,
    {
        let mut visited: HashSet<String> = HashSet::new();
        let mut stack: Vec<Edge> = root.dependencies().into_iter().map(Edge::root).collect();
        let mut edges: Vec<Edge> = Vec::new();

        while let Some(edge) = stack.pop() {
            if let Some(report) = progress.as_deref_mut() {
                report(&edge, visited.len(), stack.len());
            }

            let key = edge.locator.to_string();
            if visited.contains(&key) {
                tracing::debug!(locator = %key, "already visited, skipping");
                continue;
            }

            edges.push(edge.clone());

            let directory = storage.fetch(&edge.locator)?;
            let Some(artifact) = loader.load(&directory)? else {
                tracing::warn!(locator = %key, directory = %directory.display(),
                    "fetched directory is not a recognizable artifact");
                visited.insert(key);
                continue;
            };

            visited.insert(key);

            let name = edge.locator.name().unwrap_or_default();
            let addon = artifact.addon(name).ok_or_else(|| Error::MissingAddon {
                name: name.to_string(),
                src: edge.locator.source.clone(),
            })?;

            for dependency in addon.dependencies {
                stack.push(Edge::child_of(&edge, dependency));
            }
        }

        Ok(Self { edges })
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }
}
