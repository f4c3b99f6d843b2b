//! Loading bundled schemas into sophia graphs.

use std::io;

use semdesk_vocabulary::loader::{
    load_ontology, DirectoryResources, EmbeddedResources, ResourceReader,
};
use semdesk_vocabulary::vocabularies::{data, dc, filesource, geo, source, tags};
use semdesk_vocabulary::{LoadError, Registry, TermDef, Vocabulary};
use sophia::api::prelude::*;
use sophia::inmem::graph::FastGraph;

fn has_subject(graph: &FastGraph, iri: &str) -> bool {
    graph
        .triples_matching([IriRef::new_unchecked(iri)], Any, Any)
        .next()
        .is_some()
}

fn subjects_in(graph: &FastGraph, namespace: &str) -> usize {
    let mut subjects = std::collections::HashSet::new();
    for t in graph.triples() {
        let t = t.unwrap();
        if let Some(iri) = t.s().iri() {
            if iri.as_str().starts_with(namespace) && iri.as_str() != namespace {
                subjects.insert(iri.as_str().to_owned());
            }
        }
    }
    subjects.len()
}

fn seeded_graph() -> FastGraph {
    let mut graph = FastGraph::new();
    graph
        .insert(
            IriRef::new_unchecked("http://example.org/s"),
            IriRef::new_unchecked("http://example.org/p"),
            IriRef::new_unchecked("http://example.org/o"),
        )
        .unwrap();
    graph
}

#[test]
fn every_bundled_schema_covers_its_table() {
    for vocabulary in &Registry::full().vocabularies {
        if vocabulary.resources().is_empty() {
            continue;
        }
        let mut graph = FastGraph::new();
        let inserted = load_ontology(vocabulary, &EmbeddedResources, &mut graph).unwrap();
        assert!(inserted > 0, "{} loaded nothing", vocabulary.name);
        assert_eq!(graph.triples().count(), inserted);
        for term in vocabulary.table().iter() {
            assert!(
                has_subject(&graph, &term.iri),
                "{} is missing from the {} schema",
                term.iri,
                vocabulary.name
            );
        }
        assert_eq!(subjects_in(&graph, vocabulary.namespace), vocabulary.table().len());
    }
}

#[test]
fn extension_loads_base_schema_too() {
    let mut graph = FastGraph::new();
    load_ontology(&filesource::VOCABULARY, &EmbeddedResources, &mut graph).unwrap();
    assert!(has_subject(&graph, &format!("{}rootFolder", source::NS)));
    assert!(has_subject(&graph, &format!("{}DataSource", source::NS)));
}

#[test]
fn loading_twice_inserts_nothing_new() {
    let mut graph = FastGraph::new();
    let first = load_ontology(&tags::VOCABULARY, &EmbeddedResources, &mut graph).unwrap();
    let second = load_ontology(&tags::VOCABULARY, &EmbeddedResources, &mut graph).unwrap();
    assert!(first > 0);
    assert_eq!(second, 0);
    assert_eq!(graph.triples().count(), first);
}

#[test]
fn directory_resources_match_embedded() {
    let dir = tempfile::tempdir().unwrap();
    let content = EmbeddedResources.get("geo.rdfs").unwrap();
    std::fs::write(dir.path().join("geo.rdfs"), content).unwrap();

    let mut from_dir = FastGraph::new();
    let mut embedded = FastGraph::new();
    let a = load_ontology(&geo::VOCABULARY, &DirectoryResources::new(dir.path()), &mut from_dir)
        .unwrap();
    let b = load_ontology(&geo::VOCABULARY, &EmbeddedResources, &mut embedded).unwrap();
    assert_eq!(a, b);
}

#[test]
fn vocabulary_without_schema_is_rejected() {
    let mut graph = seeded_graph();
    let err = load_ontology(&dc::VOCABULARY, &EmbeddedResources, &mut graph).unwrap_err();
    assert!(matches!(err, LoadError::NoResource { vocabulary: "dc" }));
    assert_eq!(graph.triples().count(), 1);
}

#[test]
fn missing_resource_leaves_graph_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut graph = seeded_graph();
    let err = load_ontology(&data::VOCABULARY, &DirectoryResources::new(dir.path()), &mut graph)
        .unwrap_err();
    assert!(
        matches!(err, LoadError::ResourceNotFound { ref resource } if resource == "data.rdfs"),
        "unexpected error: {err}"
    );
    assert_eq!(graph.triples().count(), 1);
}

#[test]
fn missing_extension_resource_discards_staged_base() {
    let only_base = |name: &str| -> io::Result<Option<ResourceReader<'static>>> {
        Ok(EmbeddedResources
            .get(name)
            .filter(|_| name == "source.rdfs")
            .map(|content| Box::new(content.as_bytes()) as ResourceReader<'static>))
    };
    let mut graph = seeded_graph();
    let err = load_ontology(&filesource::VOCABULARY, &only_base, &mut graph).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ResourceNotFound { ref resource } if resource == "source2.rdfs"
    ));
    assert_eq!(graph.triples().count(), 1);
}

static BROKEN_TERMS: &[TermDef] = &[TermDef::class("Thing", "Thing", None)];
static BROKEN: Vocabulary = Vocabulary::new(
    "broken",
    "ex",
    "http://example.org/ns#",
    "Broken",
    "broken.rdfs",
    BROKEN_TERMS,
)
.with_resource("broken.ttl");

#[test]
fn malformed_resource_is_wrapped_and_leaves_graph_unchanged() {
    let malformed = |_: &str| -> io::Result<Option<ResourceReader<'static>>> {
        let body: &'static [u8] =
            b"<http://example.org/ns#Thing> <http://example.org/ns#p> <http://example.org/ns#o> .\n\
              this is @@ not turtle\n";
        Ok(Some(Box::new(body) as ResourceReader<'static>))
    };
    let mut graph = seeded_graph();
    let err = load_ontology(&BROKEN, &malformed, &mut graph).unwrap_err();
    assert!(
        matches!(err, LoadError::Parse { ref resource, .. } if resource == "broken.ttl"),
        "unexpected error: {err}"
    );
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(graph.triples().count(), 1);
}

#[test]
fn unreadable_locator_surfaces_io_error() {
    let failing = |_: &str| -> io::Result<Option<ResourceReader<'static>>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    };
    let mut graph = FastGraph::new();
    let err = load_ontology(&geo::VOCABULARY, &failing, &mut graph).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(graph.triples().count(), 0);
}
