//! Command implementations for gdpack-cli.

pub mod add;
pub mod addon;
pub mod export;
pub mod install;
pub mod remove;
pub mod tree;

pub use add::run_add;
pub use addon::run_addon_add;
pub use export::run_export;
pub use install::run_install;
pub use remove::run_remove;
pub use tree::run_tree;

use gdpack_core::Storage;
use gdpack_storage::GitStorage;

use crate::error::Result;
use crate::progress::TerminalSink;

/// Run `f` with a fresh storage instance and tear its fetched directories
/// down afterwards, whether `f` succeeded or not.
pub(crate) fn with_storage<T>(f: impl FnOnce(&mut GitStorage<TerminalSink>) -> Result<T>) -> Result<T> {
    let mut storage = GitStorage::with_sink(TerminalSink);
    let result = f(&mut storage);
    if let Err(e) = storage.cleanup() {
        tracing::warn!(error = %e, "storage cleanup failed");
    }
    result
}
