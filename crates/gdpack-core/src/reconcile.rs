//! Conflict reconciliation: flattening a resolved graph into an install set.
//!
//! Discovered edges are grouped by addon name and each group is folded
//! pairwise through the version coalescer. Compatible groups collapse to a
//! single winning locator; incompatible groups produce a [`Conflict`] that
//! is reported in one aggregate [`ConflictError`].

use std::fmt;

use crate::graph::{Edge, Graph};
use crate::locator::Locator;
use crate::version;

/// Why two edges could not be reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// The edges name the same addon but fetch it from different sources.
    MismatchedSource,
    /// The edges require versions that cannot be coalesced.
    MismatchedVersion,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedSource => write!(f, "mismatching sources"),
            Self::MismatchedVersion => write!(f, "mismatching versions"),
        }
    }
}

/// A pair of irreconcilable edges, with their full discovery paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub reason: ConflictReason,
    pub edges: Vec<Edge>,
}

impl Conflict {
    fn between(reason: ConflictReason, left: &Edge, right: &Edge) -> Self {
        Self {
            reason,
            edges: vec![left.clone(), right.clone()],
        }
    }
}

/// Aggregate error for all conflicting addon groups, in the order their
/// names first appeared in the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ConflictError {
    pub conflicts: Vec<(String, Conflict)>,
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.conflicts.iter().map(|(name, _)| name.as_str()).collect();
        write!(
            f,
            "conflicting requirements for {} addon(s): {}",
            self.conflicts.len(),
            names.join(", ")
        )
    }
}

/// Pairwise fold state: either the edge that currently wins the group, or
/// the conflict that poisoned it.
enum Folded<'a> {
    Edge(&'a Edge),
    Conflict(Conflict),
}

/// Coalesce two edges for the same addon name.
///
/// A conflict already in the accumulator is sticky: once a group has
/// conflicted, later pairs are not examined.
fn coalesce_edges<'a>(acc: Folded<'a>, next: &'a Edge) -> Folded<'a> {
    let Folded::Edge(current) = acc else {
        return acc;
    };

    if current.locator.source != next.locator.source {
        return Folded::Conflict(Conflict::between(
            ConflictReason::MismatchedSource,
            current,
            next,
        ));
    }

    let left = current.locator.version_or_latest();
    let right = next.locator.version_or_latest();
    match version::coalesce(left, right) {
        None => Folded::Conflict(Conflict::between(
            ConflictReason::MismatchedVersion,
            current,
            next,
        )),
        Some(winner) if winner == right => Folded::Edge(next),
        Some(_) => Folded::Edge(current),
    }
}

impl Graph {
    /// Flatten the graph into a unique, conflict-free list of locators to
    /// install, ordered by the first appearance of each addon name.
    ///
    /// # Errors
    ///
    /// Returns a [`ConflictError`] covering every conflicting addon group.
    pub fn flatten(&self) -> Result<Vec<Locator>, ConflictError> {
        // Group edges by addon name, preserving first-seen group order.
        let mut groups: Vec<(String, Vec<&Edge>)> = Vec::new();
        for edge in &self.edges {
            let name = edge.locator.name().unwrap_or_default().to_string();
            match groups.iter_mut().find(|(group, _)| *group == name) {
                Some((_, members)) => members.push(edge),
                None => groups.push((name, vec![edge])),
            }
        }

        let mut winners: Vec<Locator> = Vec::new();
        let mut conflicts: Vec<(String, Conflict)> = Vec::new();

        for (name, members) in groups {
            let Some((first, rest)) = members.split_first() else {
                continue;
            };
            let folded = rest.iter().copied().fold(Folded::Edge(*first), coalesce_edges);

            match folded {
                Folded::Edge(edge) => winners.push(edge.locator.clone()),
                Folded::Conflict(conflict) => conflicts.push((name, conflict)),
            }
        }

        if !conflicts.is_empty() {
            return Err(ConflictError { conflicts });
        }

        Ok(winners)
    }
}
