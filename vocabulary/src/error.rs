//! Error types for vocabulary validation and ontology loading.

use std::error::Error as StdError;

/// Boxed error produced by the RDF parser or the caller's graph.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A problem in the static declarations of a vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// A local name is declared more than once in the same vocabulary.
    #[error("vocabulary '{vocabulary}' declares term '{name}' more than once")]
    DuplicateTerm {
        /// Registry name of the vocabulary.
        vocabulary: &'static str,
        /// The repeated local name.
        name: String,
    },
    /// An identifier is not a valid absolute IRI.
    #[error("'{iri}' is not a valid absolute IRI")]
    InvalidIri {
        /// The offending identifier.
        iri: String,
    },
    /// An extension does not share the namespace of its base.
    #[error("extension '{extension}' uses namespace <{found}> but its base uses <{expected}>")]
    NamespaceMismatch {
        /// Registry name of the extension.
        extension: &'static str,
        /// Namespace of the base vocabulary.
        expected: &'static str,
        /// Namespace of the extension.
        found: &'static str,
    },
    /// Two composed tables map the same name to different identifiers.
    #[error("term '{name}' is already <{existing}>, cannot redefine it as <{proposed}>")]
    Conflict {
        /// The local name defined twice.
        name: String,
        /// Identifier in the base table.
        existing: String,
        /// Identifier in the extension table.
        proposed: String,
    },
}

/// Failure to load a bundled ontology document into a graph.
///
/// None of these are retried; each is fatal for the call that raised it.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The vocabulary does not ship a schema resource.
    #[error("vocabulary '{vocabulary}' has no bundled schema resource")]
    NoResource {
        /// Registry name of the vocabulary.
        vocabulary: &'static str,
    },
    /// The locator could not find the resource.
    #[error("resource not found: {resource}")]
    ResourceNotFound {
        /// Resource name passed to the locator.
        resource: String,
    },
    /// The resource exists but could not be opened.
    #[error("failed to open resource {resource}")]
    Io {
        /// Resource name passed to the locator.
        resource: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading or parsing the resource failed.
    #[error("failed to parse resource {resource}")]
    Parse {
        /// Resource name passed to the locator.
        resource: String,
        /// Parser error.
        #[source]
        source: BoxError,
    },
    /// The caller's graph rejected the parsed triples.
    #[error("failed to insert parsed triples into the graph")]
    Insert {
        /// Graph error.
        #[source]
        source: BoxError,
    },
}
