//! Graph resolution over an in-memory universe of sources.

mod common;

use common::{FakeArtifact, FakeLoader, FakeStorage};
use gdpack_core::{Error, Graph, Locator};
use pretty_assertions::assert_eq;

fn locator(name: &str, source: &str, version: &str) -> Locator {
    Locator::new(name, source, version)
}

/// A root artifact with the given direct dependencies and no addons.
fn root(dependencies: Vec<Locator>) -> FakeArtifact {
    FakeArtifact {
        dependencies,
        ..Default::default()
    }
}

/// Register a source exporting one addon with the given dependencies.
fn leaf(loader: &mut FakeLoader, name: &str, source: &str, deps: Vec<Locator>) {
    loader.insert(source, FakeArtifact::default().with_addon(name, deps));
}

#[test]
fn empty_root_yields_empty_graph() {
    let mut storage = FakeStorage::default();
    let loader = FakeLoader::default();

    let graph = Graph::resolve(&root(vec![]), &mut storage, &loader, None).unwrap();

    assert!(graph.is_empty());
    assert!(storage.fetched.is_empty());
}

#[test]
fn single_leaf_dependency_yields_one_edge() {
    let mut storage = FakeStorage::default();
    let mut loader = FakeLoader::default();
    leaf(&mut loader, "ui", "repo-x", vec![]);

    let graph = Graph::resolve(
        &root(vec![locator("ui", "repo-x", "1.0.0")]),
        &mut storage,
        &loader,
        None,
    )
    .unwrap();

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.edges[0].locator, locator("ui", "repo-x", "1.0.0"));
    assert!(graph.edges[0].path.is_empty());
}

#[test]
fn transitive_dependencies_carry_their_path() {
    let mut storage = FakeStorage::default();
    let mut loader = FakeLoader::default();
    leaf(&mut loader, "ui", "repo-x", vec![locator("fox", "repo-y", "2.0.0")]);
    leaf(&mut loader, "fox", "repo-y", vec![]);

    let graph = Graph::resolve(
        &root(vec![locator("ui", "repo-x", "1.0.0")]),
        &mut storage,
        &loader,
        None,
    )
    .unwrap();

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.edges[1].locator, locator("fox", "repo-y", "2.0.0"));
    assert_eq!(graph.edges[1].path, vec![locator("ui", "repo-x", "1.0.0")]);
}

#[test]
fn value_equal_locators_are_fetched_once() {
    // Two independent parents require the exact same locator; the visited
    // set is keyed by value, so the shared dependency is expanded once.
    let mut storage = FakeStorage::default();
    let mut loader = FakeLoader::default();
    let shared = locator("fox", "repo-y", "2.0.0");
    leaf(&mut loader, "ui", "repo-x", vec![shared.clone()]);
    leaf(&mut loader, "menu", "repo-z", vec![shared.clone()]);
    leaf(&mut loader, "fox", "repo-y", vec![]);

    let graph = Graph::resolve(
        &root(vec![
            locator("ui", "repo-x", "1.0.0"),
            locator("menu", "repo-z", "1.0.0"),
        ]),
        &mut storage,
        &loader,
        None,
    )
    .unwrap();

    let fox_edges = graph
        .edges
        .iter()
        .filter(|e| e.locator == shared)
        .count();
    assert_eq!(fox_edges, 1);
    let fox_fetches = storage
        .fetched
        .iter()
        .filter(|f| *f == &shared.to_string())
        .count();
    assert_eq!(fox_fetches, 1);
}

#[test]
fn cycles_terminate_through_the_visited_set() {
    let mut storage = FakeStorage::default();
    let mut loader = FakeLoader::default();
    let a = locator("a", "repo-a", "1.0.0");
    let b = locator("b", "repo-b", "1.0.0");
    leaf(&mut loader, "a", "repo-a", vec![b.clone()]);
    leaf(&mut loader, "b", "repo-b", vec![a.clone()]);

    let graph = Graph::resolve(&root(vec![a.clone()]), &mut storage, &loader, None).unwrap();

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.edges[0].locator, a);
    assert_eq!(graph.edges[1].locator, b);
}

#[test]
fn unreadable_artifact_is_kept_but_not_expanded() {
    // "repo-junk" fetches fine but the loader does not recognize it.
    let mut storage = FakeStorage::default();
    let loader = FakeLoader::default();

    let graph = Graph::resolve(
        &root(vec![locator("junk", "repo-junk", "1.0.0")]),
        &mut storage,
        &loader,
        None,
    )
    .unwrap();

    assert_eq!(graph.len(), 1);
    assert_eq!(storage.fetched, vec!["junk@repo-junk@1.0.0".to_string()]);
}

#[test]
fn missing_addon_in_artifact_is_fatal() {
    let mut storage = FakeStorage::default();
    let mut loader = FakeLoader::default();
    // The artifact exists but exports a different addon than the locator names.
    leaf(&mut loader, "other", "repo-x", vec![]);

    let err = Graph::resolve(
        &root(vec![locator("ui", "repo-x", "1.0.0")]),
        &mut storage,
        &loader,
        None,
    )
    .unwrap_err();

    assert!(matches!(err, Error::MissingAddon { ref name, .. } if name == "ui"));
}

#[test]
fn progress_reports_every_popped_edge() {
    let mut storage = FakeStorage::default();
    let mut loader = FakeLoader::default();
    leaf(&mut loader, "ui", "repo-x", vec![locator("fox", "repo-y", "2.0.0")]);
    leaf(&mut loader, "fox", "repo-y", vec![]);

    let mut seen: Vec<(String, usize, usize)> = Vec::new();
    let mut on_progress = |edge: &gdpack_core::Edge, visited: usize, remaining: usize| {
        seen.push((edge.locator.to_string(), visited, remaining));
    };

    Graph::resolve(
        &root(vec![locator("ui", "repo-x", "1.0.0")]),
        &mut storage,
        &loader,
        Some(&mut on_progress),
    )
    .unwrap();

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], ("ui@repo-x@1.0.0".to_string(), 0, 0));
    assert_eq!(seen[1].0, "fox@repo-y@2.0.0");
    assert_eq!(seen[1].1, 1);
}

#[test]
fn conflicting_requirements_survive_to_flatten() {
    // Both parents want "fox" but from different sources; resolution itself
    // succeeds, reconciliation reports the conflict with full paths.
    let mut storage = FakeStorage::default();
    let mut loader = FakeLoader::default();
    leaf(&mut loader, "ui", "repo-x", vec![locator("fox", "repo-y", "1.0.0")]);
    leaf(&mut loader, "menu", "repo-z", vec![locator("fox", "repo-w", "1.0.0")]);
    leaf(&mut loader, "fox", "repo-y", vec![]);
    leaf(&mut loader, "fox", "repo-w", vec![]);

    let graph = Graph::resolve(
        &root(vec![
            locator("ui", "repo-x", "1.0.0"),
            locator("menu", "repo-z", "1.0.0"),
        ]),
        &mut storage,
        &loader,
        None,
    )
    .unwrap();

    let err = graph.flatten().unwrap_err();
    assert_eq!(err.conflicts.len(), 1);
    let (name, conflict) = &err.conflicts[0];
    assert_eq!(name, "fox");
    for edge in &conflict.edges {
        assert_eq!(edge.path.len(), 1, "conflict edges keep their full path");
    }
}
