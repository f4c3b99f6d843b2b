//! JSON-LD 1.1 serializer for vocabulary tables.
//!
//! Produces a single document with an `@context` holding the standard
//! prefixes plus the vocabulary's own, and an `@graph` array with the
//! ontology header followed by one node per term.

use serde_json::{json, Map, Value};

use crate::model::{iris, Term, TermKind, Vocabulary};

/// Serializes a vocabulary, including inherited terms, to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(vocabulary: &'static Vocabulary) -> Value {
    let context = build_context(vocabulary);
    let graph = build_graph(vocabulary);
    json!({
        "@context": context,
        "@graph": graph
    })
}

fn build_context(vocabulary: &Vocabulary) -> Value {
    let mut ctx = Map::new();
    ctx.insert("rdf".to_owned(), json!(iris::RDF));
    ctx.insert("rdfs".to_owned(), json!(iris::RDFS));
    ctx.insert("owl".to_owned(), json!(iris::OWL));
    ctx.insert(vocabulary.prefix.to_owned(), json!(vocabulary.namespace));
    Value::Object(ctx)
}

fn build_graph(vocabulary: &'static Vocabulary) -> Value {
    let mut nodes = vec![json!({
        "@id": vocabulary.namespace,
        "@type": "owl:Ontology",
        "rdfs:label": vocabulary.label
    })];
    nodes.extend(
        vocabulary
            .table()
            .iter()
            .map(|term| term_to_json(vocabulary, term)),
    );
    Value::Array(nodes)
}

fn term_to_json(vocabulary: &Vocabulary, term: &Term) -> Value {
    let type_ = match term.kind {
        TermKind::Class => "rdfs:Class",
        TermKind::Property => "rdf:Property",
    };
    let mut node = json!({
        "@id": term.iri,
        "@type": type_,
        "rdfs:label": term.label,
        "rdfs:isDefinedBy": { "@id": vocabulary.namespace }
    });
    if let Some(comment) = term.comment {
        node["rdfs:comment"] = json!(comment);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabularies::{data, geo};

    #[test]
    fn produces_context_and_graph() {
        let json = to_json_ld(&geo::VOCABULARY);
        assert!(json["@context"].is_object());
        assert_eq!(json["@context"]["geo"], geo::NS);
        assert!(json["@graph"].is_array());
    }

    #[test]
    fn graph_has_header_and_one_node_per_term() {
        let json = to_json_ld(&data::VOCABULARY);
        let graph = json["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 1 + data::table().len());
        for (i, node) in graph.iter().enumerate() {
            assert!(!node["@id"].is_null(), "Node at index {i} is missing @id");
        }
    }

    #[test]
    fn prefixed_names_are_declared_in_context() {
        for vocabulary in crate::Registry::full().vocabularies.iter().copied() {
            let json = to_json_ld(vocabulary);
            let context = json["@context"].as_object().unwrap();
            let declared = |name: &str| {
                name.split_once(':')
                    .is_some_and(|(prefix, _)| context.contains_key(prefix))
            };
            let graph = json["@graph"].as_array().unwrap();
            for node in graph {
                for (key, value) in node.as_object().unwrap() {
                    match key.as_str() {
                        "@id" => {}
                        "@type" => {
                            let type_ = value.as_str().unwrap();
                            assert!(declared(type_), "Undeclared prefix in {type_}");
                        }
                        _ => assert!(declared(key), "Undeclared prefix in {key}"),
                    }
                }
            }
            for term in vocabulary.table().iter() {
                assert!(
                    graph.iter().any(|n| n["@id"] == term.iri.as_str()),
                    "{} has no node in the {} output",
                    term.iri,
                    vocabulary.name
                );
            }
        }
    }

    #[test]
    fn class_nodes_are_typed() {
        let json = to_json_ld(&geo::VOCABULARY);
        let graph = json["@graph"].as_array().unwrap();
        let point = graph
            .iter()
            .find(|n| n["@id"] == "http://www.w3.org/2003/01/geo/wgs84_pos#Point")
            .unwrap();
        assert_eq!(point["@type"], "rdfs:Class");
        assert_eq!(point["rdfs:label"], "point");
    }
}
