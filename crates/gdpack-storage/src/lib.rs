//! Git-backed storage for addon sources.
//!
//! Every locator source is a git URL (or local path). Fetching clones the
//! source into a temporary directory and checks out the requested version;
//! fetches are cached per storage instance so one command invocation never
//! clones the same locator twice. All fetched directories are removed in a
//! single [`cleanup`] pass at the end of the run.
//!
//! [`cleanup`]: gdpack_core::Storage::cleanup

mod error;
mod git;

pub use error::{Error, Result};
pub use git::GitStorage;
