//! Turtle 1.1 serializer for vocabulary tables.
//!
//! Produces a valid Turtle document with the standard prefixes, the
//! vocabulary's own prefix, an ontology header, and one block per term.

use crate::model::{iris, Term, TermKind, Vocabulary};

/// Serializes a vocabulary, including inherited terms, to a Turtle string.
#[must_use]
pub fn to_turtle(vocabulary: &'static Vocabulary) -> String {
    let table = vocabulary.table();
    let mut out = String::with_capacity(256 * table.len() + 512);

    out.push_str(&format!("@prefix rdf:  <{}> .\n", iris::RDF));
    out.push_str(&format!("@prefix rdfs: <{}> .\n", iris::RDFS));
    out.push_str(&format!("@prefix owl:  <{}> .\n", iris::OWL));
    out.push_str(&format!(
        "@prefix {}: <{}> .\n\n",
        vocabulary.prefix, vocabulary.namespace
    ));

    out.push_str(&format!(
        "<{}>\n  a owl:Ontology ;\n  rdfs:label {} .\n\n",
        vocabulary.namespace,
        turtle_string(vocabulary.label)
    ));

    for term in table.iter() {
        out.push_str(&term_block(vocabulary, term));
    }

    out
}

fn term_block(vocabulary: &Vocabulary, term: &Term) -> String {
    let type_str = match term.kind {
        TermKind::Class => "rdfs:Class",
        TermKind::Property => "rdf:Property",
    };
    let comment_str = term
        .comment
        .map(|c| format!("  rdfs:comment {} ;\n", turtle_string(c)))
        .unwrap_or_default();
    format!(
        "<{}>\n  a {} ;\n  rdfs:label {} ;\n{}  rdfs:isDefinedBy <{}> .\n\n",
        term.iri,
        type_str,
        turtle_string(term.label),
        comment_str,
        vocabulary.namespace
    )
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabularies::{filesource, geo, vcard};

    #[test]
    fn produces_prefixes_and_header() {
        let turtle = to_turtle(&geo::VOCABULARY);
        assert!(turtle.contains("@prefix rdfs:"));
        assert!(turtle.contains("@prefix geo: <http://www.w3.org/2003/01/geo/wgs84_pos#> ."));
        assert!(turtle.contains("a owl:Ontology"));
    }

    #[test]
    fn every_term_has_a_block() {
        let turtle = to_turtle(&vcard::VOCABULARY);
        for term in vcard::table().iter() {
            assert!(
                turtle.contains(&format!("<{}>\n  a ", term.iri)),
                "Missing block for {}",
                term.iri
            );
        }
    }

    #[test]
    fn terms_without_comment_omit_rdfs_comment() {
        let turtle = to_turtle(&vcard::VOCABULARY);
        assert!(turtle.contains(concat!(
            "<http://www.w3.org/2006/vcard/ns#sound>\n",
            "  a rdf:Property ;\n",
            "  rdfs:label \"sound\" ;\n",
            "  rdfs:isDefinedBy"
        )));
    }

    #[test]
    fn extension_includes_base_terms() {
        let turtle = to_turtle(&filesource::VOCABULARY);
        assert!(turtle.contains("source#rootFolder>"));
        assert!(turtle.contains("source#DataSource>"));
    }

    #[test]
    fn output_parses_back_with_every_term() {
        use sophia::api::source::TripleSource;
        use sophia::inmem::graph::FastGraph;

        for vocabulary in crate::Registry::full().vocabularies.iter().copied() {
            let mut graph = FastGraph::new();
            sophia::turtle::parser::turtle::parse_str(&to_turtle(vocabulary))
                .add_to_graph(&mut graph)
                .unwrap();
            crate::serializer::testing::assert_terms_are_subjects(vocabulary, &graph);
        }
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(turtle_string("a \"b\"\nc"), "\"a \\\"b\\\"\\nc\"");
    }
}
