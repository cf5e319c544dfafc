//! Storage collaborator: fetching sources and copying addon directories.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::locator::Locator;

/// A progress event emitted by storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// What is happening, e.g. `receiving objects` or `copying files`.
    pub phase: String,
    /// Units completed so far.
    pub loaded: u64,
    /// Total units, when known up front.
    pub total: Option<u64>,
}

impl Progress {
    pub fn new(phase: impl Into<String>, loaded: u64, total: Option<u64>) -> Self {
        Self {
            phase: phase.into(),
            loaded,
            total,
        }
    }
}

/// Receives progress events from storage operations.
///
/// One sink is owned per command invocation; implementations render to the
/// terminal or discard the events.
pub trait ProgressSink {
    fn emit(&mut self, progress: &Progress);
}

/// A sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&mut self, _progress: &Progress) {}
}

impl<F: FnMut(&Progress)> ProgressSink for F {
    fn emit(&mut self, progress: &Progress) {
        self(progress);
    }
}

/// Fetches locators to local directories and materializes addon files.
///
/// Implementations cache fetches for the lifetime of one command invocation,
/// keyed by the stringified locator, and tear every fetched directory down
/// in a single [`Storage::cleanup`] pass at the end of the run whether the
/// command succeeded or not.
pub trait Storage {
    /// Fetch the locator's source and return the local directory holding it.
    fn fetch(&mut self, locator: &Locator) -> Result<PathBuf>;

    /// Copy an addon directory into place, emitting per-entry progress.
    fn copy_addon(&mut self, from: &Path, to: &Path) -> Result<()>;

    /// Remove all fetched temporary directories.
    fn cleanup(&mut self) -> Result<()>;
}
