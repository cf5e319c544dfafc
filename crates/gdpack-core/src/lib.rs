//! Dependency resolution engine for gdpack.
//!
//! This crate contains the machinery that turns a project's declared addon
//! dependencies into a conflict-free install set: locator parsing, version
//! coalescing, transitive graph resolution, conflict reconciliation, and the
//! dependency manager that orchestrates `add`/`remove`/`install`.
//!
//! Filesystem and network concerns stay behind the collaborator traits in
//! [`artifact`] and [`storage`]; the CLI and the on-disk project format live
//! in sibling crates.

pub mod artifact;
pub mod confirm;
pub mod error;
pub mod graph;
pub mod locator;
pub mod manager;
pub mod reconcile;
pub mod storage;
pub mod version;

pub use artifact::{AddonInfo, Artifact, ArtifactLoader, DefaultExport, RootArtifact};
pub use confirm::{AssumeDefault, Confirm};
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use locator::Locator;
pub use manager::{AddOptions, DependencyManager};
pub use reconcile::{Conflict, ConflictError, ConflictReason};
pub use storage::{NullSink, Progress, ProgressSink, Storage};
