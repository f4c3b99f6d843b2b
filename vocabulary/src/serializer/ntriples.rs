//! N-Triples serializer for vocabulary tables.
//!
//! One triple per line, absolute IRIs only. Suitable for streaming, bulk
//! loading, and diff-friendly storage.

use crate::model::{iris, Vocabulary};

const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

/// Serializes a vocabulary, including inherited terms, to an N-Triples string.
#[must_use]
pub fn to_ntriples(vocabulary: &'static Vocabulary) -> String {
    let table = vocabulary.table();
    let mut out = String::with_capacity(512 * table.len() + 256);

    let ns = vocabulary.namespace;
    triple(&mut out, ns, iris::RDF_TYPE, &iri(OWL_ONTOLOGY));
    triple(&mut out, ns, iris::RDFS_LABEL, &lit(vocabulary.label));

    for term in table.iter() {
        triple(&mut out, &term.iri, iris::RDF_TYPE, &iri(term.kind.type_iri()));
        triple(&mut out, &term.iri, iris::RDFS_LABEL, &lit(term.label));
        if let Some(comment) = term.comment {
            triple(&mut out, &term.iri, iris::RDFS_COMMENT, &lit(comment));
        }
        triple(&mut out, &term.iri, iris::RDFS_IS_DEFINED_BY, &iri(ns));
    }

    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}
