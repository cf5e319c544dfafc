//! Clone-based fetching of addon sources.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::{FetchOptions, RemoteCallbacks, Repository};
use tempfile::TempDir;

use gdpack_core::{Locator, NullSink, Progress, ProgressSink, Storage};

use crate::error::{Error, Result};

/// Versions that mean "whatever the source's HEAD is".
const LATEST: &str = "latest";

/// Storage backed by git clones into temporary directories.
///
/// Fetches are cached by stringified locator for the lifetime of the
/// instance. Temporary clones live until [`cleanup`] runs; dropping the
/// storage without calling it still removes them, but silently.
///
/// [`cleanup`]: Storage::cleanup
pub struct GitStorage<S = NullSink> {
    sink: S,
    cache: HashMap<String, PathBuf>,
    clones: Vec<TempDir>,
}

impl GitStorage {
    /// Storage that discards progress events.
    pub fn new() -> Self {
        Self::with_sink(NullSink)
    }
}

impl Default for GitStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ProgressSink> GitStorage<S> {
    /// Storage that reports progress to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            cache: HashMap::new(),
            clones: Vec::new(),
        }
    }

    fn fetch_inner(&mut self, locator: &Locator) -> Result<PathBuf> {
        let key = locator.to_string();
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(locator = %key, "fetch cache hit");
            return Ok(cached.clone());
        }

        let dir = tempfile::Builder::new()
            .prefix("gdpack-")
            .tempdir()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;
        tracing::info!(source = %locator.source, "cloning source");

        let repo = {
            let sink = &mut self.sink;
            let mut callbacks = RemoteCallbacks::new();
            callbacks.transfer_progress(move |stats| {
                sink.emit(&Progress::new(
                    "receiving objects",
                    stats.received_objects() as u64,
                    Some(stats.total_objects() as u64),
                ));
                true
            });
            let mut fetch_options = FetchOptions::new();
            fetch_options.remote_callbacks(callbacks);

            RepoBuilder::new()
                .fetch_options(fetch_options)
                .clone(&locator.source, dir.path())?
        };

        let version = locator.version_or_latest();
        if version != LATEST {
            checkout_version(&repo, locator, version)?;
        }

        let path = dir.path().to_path_buf();
        self.clones.push(dir);
        self.cache.insert(key, path.clone());
        Ok(path)
    }

    fn copy_addon_inner(&mut self, from: &Path, to: &Path) -> Result<()> {
        let files = collect_files(from)?;
        let total = files.len() as u64;

        tracing::info!(from = %from.display(), to = %to.display(), files = total, "copying addon");
        for (index, relative) in files.iter().enumerate() {
            let source = from.join(relative);
            let target = to.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            fs::copy(&source, &target).map_err(|e| Error::io(&target, e))?;
            self.sink
                .emit(&Progress::new("copying files", index as u64 + 1, Some(total)));
        }

        Ok(())
    }
}

impl<S: ProgressSink> Storage for GitStorage<S> {
    fn fetch(&mut self, locator: &Locator) -> gdpack_core::Result<PathBuf> {
        self.fetch_inner(locator)
            .map_err(gdpack_core::Error::collaborator)
    }

    fn copy_addon(&mut self, from: &Path, to: &Path) -> gdpack_core::Result<()> {
        self.copy_addon_inner(from, to)
            .map_err(gdpack_core::Error::collaborator)
    }

    fn cleanup(&mut self) -> gdpack_core::Result<()> {
        self.cache.clear();
        for dir in self.clones.drain(..) {
            let path = dir.path().to_path_buf();
            tracing::debug!(path = %path.display(), "removing fetched directory");
            if let Err(e) = dir.close() {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to remove fetched directory"
                );
            }
        }
        Ok(())
    }
}

/// Check out `version` in a freshly cloned repository.
///
/// Tries the version verbatim, then with a `v` prefix, as a tag or local
/// ref first and as a remote branch second.
fn checkout_version(repo: &Repository, locator: &Locator, version: &str) -> Result<()> {
    let candidates = [
        version.to_string(),
        format!("v{version}"),
        format!("origin/{version}"),
        format!("origin/v{version}"),
    ];

    for candidate in &candidates {
        let Ok((object, reference)) = repo.revparse_ext(candidate) else {
            continue;
        };

        repo.checkout_tree(&object, Some(CheckoutBuilder::default().force()))?;
        match reference.as_ref().and_then(git2::Reference::name) {
            Some(name) => repo.set_head(name)?,
            None => repo.set_head_detached(object.id())?,
        }

        tracing::debug!(source = %locator.source, reference = %candidate, "checked out version");
        return Ok(());
    }

    Err(Error::UnknownVersion {
        src: locator.source.clone(),
        version: version.to_string(),
    })
}

/// All regular files under `root`, as paths relative to it. Git metadata is
/// never copied.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                if path.file_name().is_some_and(|n| n == ".git") {
                    continue;
                }
                walk(root, &path, out)?;
            } else if let Ok(relative) = path.strip_prefix(root) {
                out.push(relative.to_path_buf());
            }
        }
        Ok(())
    }

    let mut files = Vec::new();
    walk(root, root, &mut files)?;
    files.sort();
    Ok(files)
}
