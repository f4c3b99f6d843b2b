//! Serializers for vocabulary tables.
//!
//! Each vocabulary is written as an RDF Schema document in one of three formats:
//! - **Turtle** ([`turtle`]): `<name>.ttl`, for RDF tooling
//! - **N-Triples** ([`ntriples`]): `<name>.nt`, for bulk loading and diffs
//! - **JSON-LD** ([`jsonld`]): `<name>.jsonld`, requires the `serializers` feature

#[cfg(feature = "serializers")]
pub mod jsonld;
pub mod ntriples;
pub mod turtle;

#[cfg(test)]
pub(crate) mod testing {
    use sophia::api::graph::Graph;
    use sophia::api::term::matcher::Any;
    use sophia::api::term::IriRef;
    use sophia::inmem::graph::FastGraph;

    use crate::model::Vocabulary;

    /// Asserts that every term of `vocabulary` is the subject of a triple.
    pub(crate) fn assert_terms_are_subjects(vocabulary: &'static Vocabulary, graph: &FastGraph) {
        for term in vocabulary.table().iter() {
            let found = graph
                .triples_matching([IriRef::new_unchecked(term.iri.as_str())], Any, Any)
                .next()
                .is_some();
            assert!(found, "{} is not a subject in the {} output", term.iri, vocabulary.name);
        }
    }
}
