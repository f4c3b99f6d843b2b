//! Reads RDF Schema documents into a flat list of terms.

use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;

use anyhow::{anyhow, bail, Result};
use semdesk_vocabulary::loader::{parse_into, ResourceFormat};
use semdesk_vocabulary::model::iris;
use semdesk_vocabulary::TermKind;
use sophia::api::graph::Graph;
use sophia::api::term::SimpleTerm;
use sophia::api::triple::Triple;
use sophia::inmem::graph::FastGraph;

use crate::mapping::{local_name, namespace_of};

/// One class or property found in a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTerm {
    /// Local name within the schema namespace.
    pub name: String,
    /// `rdfs:label`, or the local name when the schema has none.
    pub label: String,
    /// `rdfs:comment`, whitespace-normalized.
    pub comment: Option<String>,
    /// Class or property.
    pub kind: TermKind,
}

/// The terms of one schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Namespace IRI all terms live in.
    pub namespace: String,
    /// Label of the ontology node, if the document has one.
    pub label: Option<String>,
    /// Comment of the ontology node, if the document has one.
    pub comment: Option<String>,
    /// Classes sorted by name, then properties sorted by name.
    pub terms: Vec<SchemaTerm>,
}

impl Schema {
    /// Number of terms of `kind`.
    #[must_use]
    pub fn count(&self, kind: TermKind) -> usize {
        self.terms.iter().filter(|t| t.kind == kind).count()
    }
}

/// Literal values of a subject, with their language tags.
#[derive(Debug, Default)]
struct Literals(Vec<(String, Option<String>)>);

impl Literals {
    /// Prefers an untagged or English value, then the first one seen.
    fn best(&self) -> Option<String> {
        self.0
            .iter()
            .find(|(_, lang)| lang.as_deref().map_or(true, |l| l.eq_ignore_ascii_case("en")))
            .or_else(|| self.0.first())
            .map(|(value, _)| crate::emit::normalize_comment(value))
    }
}

#[derive(Debug, Default)]
struct Subject {
    types: Vec<String>,
    labels: Literals,
    comments: Literals,
}

impl Subject {
    fn kind(&self) -> Option<TermKind> {
        let has = |iri: &str| self.types.iter().any(|t| t == iri);
        if has(iris::RDFS_CLASS) || has(iris::OWL_CLASS) {
            Some(TermKind::Class)
        } else if has(iris::RDF_PROPERTY)
            || has(iris::OWL_OBJECT_PROPERTY)
            || has(iris::OWL_DATATYPE_PROPERTY)
            || has(iris::OWL_ANNOTATION_PROPERTY)
        {
            Some(TermKind::Property)
        } else {
            None
        }
    }
}

/// Parses a schema document into a graph.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed.
pub fn read_graph<R: BufRead>(reader: R, format: ResourceFormat) -> Result<FastGraph> {
    let mut graph = FastGraph::new();
    parse_into(reader, format, &mut graph).map_err(|e| anyhow!(e))?;
    Ok(graph)
}

/// Parses a schema document and extracts its terms.
///
/// When `namespace` is `None` the most frequent namespace among the typed
/// subjects is used.
///
/// # Errors
///
/// Returns an error if the document cannot be parsed or declares no class
/// or property.
pub fn read_schema<R: BufRead>(
    reader: R,
    format: ResourceFormat,
    namespace: Option<&str>,
) -> Result<Schema> {
    let graph = read_graph(reader, format)?;
    extract_schema(&graph, namespace)
}

/// Extracts the terms of `graph` that live in `namespace`.
///
/// # Errors
///
/// Returns an error if the graph declares no class or property.
pub fn extract_schema(graph: &FastGraph, namespace: Option<&str>) -> Result<Schema> {
    let subjects = collect_subjects(graph)?;
    let namespace = match namespace {
        Some(ns) => ns.to_owned(),
        None => most_frequent_namespace(&subjects)
            .ok_or_else(|| anyhow!("schema declares no class or property"))?,
    };

    let mut terms = Vec::new();
    for (iri, subject) in &subjects {
        let Some(kind) = subject.kind() else { continue };
        let Some(name) = local_name(iri, &namespace) else {
            tracing::debug!(%iri, %namespace, "skipping term outside the schema namespace");
            continue;
        };
        if name.contains(['#', '/']) {
            tracing::warn!(%iri, "skipping term with a nested local name");
            continue;
        }
        terms.push(SchemaTerm {
            name: name.to_owned(),
            label: subject.labels.best().unwrap_or_else(|| name.to_owned()),
            comment: subject.comments.best(),
            kind,
        });
    }
    if terms.is_empty() {
        bail!("schema declares no class or property in <{namespace}>");
    }
    terms.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));

    let header = subjects
        .get(&namespace)
        .or_else(|| subjects.get(namespace.trim_end_matches(['#', '/'])));
    Ok(Schema {
        label: header.and_then(|h| h.labels.best()),
        comment: header.and_then(|h| h.comments.best()),
        namespace,
        terms,
    })
}

/// Groups the `rdf:type`, `rdfs:label` and `rdfs:comment` statements of
/// every IRI subject.
fn collect_subjects(graph: &FastGraph) -> Result<BTreeMap<String, Subject>> {
    let mut subjects: BTreeMap<String, Subject> = BTreeMap::new();
    for t in graph.triples() {
        let t = t?;
        let (SimpleTerm::Iri(s), SimpleTerm::Iri(p)) = (t.s(), t.p()) else {
            continue;
        };
        let entry = subjects.entry(s.as_str().to_owned()).or_default();
        match (p.as_str(), t.o()) {
            (iris::RDF_TYPE, SimpleTerm::Iri(o)) => entry.types.push(o.as_str().to_owned()),
            (iris::RDFS_LABEL, o) => {
                if let Some(lit) = literal(o) {
                    entry.labels.0.push(lit);
                }
            }
            (iris::RDFS_COMMENT, o) => {
                if let Some(lit) = literal(o) {
                    entry.comments.0.push(lit);
                }
            }
            _ => {}
        }
    }
    Ok(subjects)
}

fn literal(term: &SimpleTerm<'_>) -> Option<(String, Option<String>)> {
    match term {
        SimpleTerm::LiteralDatatype(value, _) => Some((value.to_string(), None)),
        SimpleTerm::LiteralLanguage(value, lang) => {
            Some((value.to_string(), Some(lang.as_str().to_owned())))
        }
        _ => None,
    }
}

/// Picks the namespace shared by most classes and properties of `graph`.
/// Ties go to the lexicographically smallest namespace.
///
/// # Errors
///
/// Returns an error if the graph cannot be iterated.
pub fn detect_namespace(graph: &FastGraph) -> Result<Option<String>> {
    Ok(most_frequent_namespace(&collect_subjects(graph)?))
}

fn most_frequent_namespace(subjects: &BTreeMap<String, Subject>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (iri, subject) in subjects {
        if subject.kind().is_some() {
            let ns = namespace_of(iri);
            if !ns.is_empty() {
                *counts.entry(ns).or_default() += 1;
            }
        }
    }
    counts
        .into_iter()
        .max_by(|(a_ns, a), (b_ns, b)| Ord::cmp(a, b).then_with(|| Ord::cmp(b_ns, a_ns)))
        .map(|(ns, _)| ns.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use semdesk_vocabulary::loader::EmbeddedResources;
    use semdesk_vocabulary::vocabularies::{geo, source};

    const SMALL: &str = r#"@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/ns#> .
@prefix other: <http://other.org/ns#> .

ex: a owl:Ontology ; rdfs:label "Example" .
ex:Widget a owl:Class ; rdfs:label "Widget"@de , "widget"@en ; rdfs:comment """A   small
    thing.""" .
ex:size a owl:DatatypeProperty .
ex:colour a rdf:Property ; rdfs:label "colour" .
ex:notATerm rdfs:label "untyped" .
other:Foreign a rdfs:Class .
"#;

    fn small() -> Schema {
        read_schema(SMALL.as_bytes(), ResourceFormat::Turtle, None).unwrap()
    }

    #[test]
    fn detects_majority_namespace() {
        assert_eq!(small().namespace, "http://example.org/ns#");
    }

    #[test]
    fn detect_namespace_on_graph() {
        let graph = read_graph(SMALL.as_bytes(), ResourceFormat::Turtle).unwrap();
        assert_eq!(
            detect_namespace(&graph).unwrap().as_deref(),
            Some("http://example.org/ns#")
        );
        assert_eq!(detect_namespace(&FastGraph::new()).unwrap(), None);
    }

    #[test]
    fn classes_first_then_properties_sorted() {
        let names: Vec<_> = small().terms.iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["Widget", "colour", "size"]);
    }

    #[test]
    fn prefers_english_label_and_normalizes_comment() {
        let schema = small();
        let widget = &schema.terms[0];
        assert_eq!(widget.kind, TermKind::Class);
        assert_eq!(widget.label, "widget");
        assert_eq!(widget.comment.as_deref(), Some("A small thing."));
    }

    #[test]
    fn label_falls_back_to_local_name() {
        let schema = small();
        let size = schema.terms.iter().find(|t| t.name == "size").unwrap();
        assert_eq!(size.label, "size");
        assert_eq!(size.comment, None);
    }

    #[test]
    fn reads_ontology_header() {
        assert_eq!(small().label.as_deref(), Some("Example"));
    }

    #[test]
    fn explicit_namespace_selects_terms() {
        let schema =
            read_schema(SMALL.as_bytes(), ResourceFormat::Turtle, Some("http://other.org/ns#"))
                .unwrap();
        assert_eq!(schema.terms.len(), 1);
        assert_eq!(schema.terms[0].name, "Foreign");
    }

    #[test]
    fn empty_schema_is_an_error() {
        let ttl = "<http://example.org/a> <http://example.org/b> \"c\" .";
        assert!(read_schema(ttl.as_bytes(), ResourceFormat::Turtle, None).is_err());
    }

    #[test]
    fn bundled_geo_schema_matches_table() {
        let content = EmbeddedResources.get("geo.rdfs").unwrap();
        let schema = read_schema(content.as_bytes(), ResourceFormat::RdfXml, None).unwrap();
        assert_eq!(schema.namespace, geo::NS);
        assert_eq!(schema.label.as_deref(), Some(geo::VOCABULARY.label));
        assert_eq!(schema.terms.len(), geo::TERMS.len());
        for (found, declared) in schema.terms.iter().zip(geo::TERMS) {
            assert_eq!(found.name, declared.name);
            assert_eq!(found.label, declared.label);
            assert_eq!(found.comment.as_deref(), declared.comment);
            assert_eq!(found.kind, declared.kind);
        }
    }

    #[test]
    fn bundled_source_schema_counts() {
        let content = EmbeddedResources.get("source.rdfs").unwrap();
        let schema = read_schema(content.as_bytes(), ResourceFormat::RdfXml, None).unwrap();
        assert_eq!(schema.namespace, source::NS);
        assert_eq!(schema.count(TermKind::Class), 5);
        assert_eq!(schema.count(TermKind::Property), 14);
    }
}
