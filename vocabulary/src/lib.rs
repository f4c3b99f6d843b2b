//! Semantic desktop RDF Schema vocabularies encoded as static Rust tables.
//!
//! The `semdesk-vocabulary` crate provides eight vocabularies (Dublin Core,
//! DCMI terms, WGS84 geo, tags, vCard, desktop data objects, and data-source
//! description with its file/web extension), 162 terms in all, as
//! immutable lookup tables, along with a loader for the bundled schema
//! documents and serializers producing Turtle, N-Triples, and JSON-LD.
//!
//! # Entry Point
//!
//! ```
//! use semdesk_vocabulary::vocabularies::dc;
//!
//! assert_eq!(dc::iri("title"), Some("http://purl.org/dc/elements/1.1/title"));
//! let registry = semdesk_vocabulary::Registry::full();
//! assert_eq!(registry.vocabularies.len(), 8);
//! ```
//!
//! # Loading a schema
//!
//! ```
//! use semdesk_vocabulary::loader::{load_ontology, EmbeddedResources};
//! use semdesk_vocabulary::vocabularies::geo;
//! use sophia::inmem::graph::FastGraph;
//!
//! let mut graph = FastGraph::new();
//! let inserted = load_ontology(&geo::VOCABULARY, &EmbeddedResources, &mut graph).unwrap();
//! assert!(inserted > 0);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod loader;
pub mod model;
pub mod serializer;
#[rustfmt::skip]
pub mod vocabularies;

pub use error::{LoadError, VocabularyError};
pub use model::{Term, TermDef, TermKind, Vocabulary, VocabularyTable};

/// All vocabularies shipped with this crate.
#[derive(Debug)]
pub struct Registry {
    /// Vocabularies in registry order; an extension follows its base.
    pub vocabularies: Vec<&'static Vocabulary>,
}

impl Registry {
    /// Returns the registry of every bundled vocabulary.
    ///
    /// Assembly order:
    /// `dc → dcterms → geo → tags → vcard → data → source → filesource`
    #[must_use]
    pub fn full() -> &'static Registry {
        static REGISTRY: std::sync::OnceLock<Registry> = std::sync::OnceLock::new();
        REGISTRY.get_or_init(|| Registry {
            vocabularies: vec![
                &vocabularies::dc::VOCABULARY,
                &vocabularies::dcterms::VOCABULARY,
                &vocabularies::geo::VOCABULARY,
                &vocabularies::tags::VOCABULARY,
                &vocabularies::vcard::VOCABULARY,
                &vocabularies::data::VOCABULARY,
                &vocabularies::source::VOCABULARY,
                &vocabularies::filesource::VOCABULARY,
            ],
        })
    }

    /// Looks up a vocabulary by registry name. Returns `None` if not found.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static Vocabulary> {
        self.vocabularies.iter().copied().find(|v| v.name == name)
    }

    /// Returns every vocabulary declared under `namespace`.
    #[must_use]
    pub fn by_namespace(&self, namespace: &str) -> Vec<&'static Vocabulary> {
        self.vocabularies
            .iter()
            .copied()
            .filter(|v| v.namespace == namespace)
            .collect()
    }

    /// Finds the vocabulary and term an identifier belongs to.
    ///
    /// When a base and an extension both carry the term, the first in
    /// registry order (the base) wins.
    #[must_use]
    pub fn resolve(&self, iri: &str) -> Option<(&'static Vocabulary, &'static Term)> {
        self.vocabularies.iter().copied().find_map(|v| {
            let name = iri.strip_prefix(v.namespace)?;
            v.table().get(name).map(|term| (v, term))
        })
    }

    /// Number of distinct identifiers across all vocabularies.
    #[must_use]
    pub fn term_count(&self) -> usize {
        let mut iris = std::collections::HashSet::new();
        for vocabulary in &self.vocabularies {
            iris.extend(vocabulary.table().iter().map(|t| t.iri.as_str()));
        }
        iris.len()
    }
}
