//! Core vocabulary model types.
//!
//! Terms are declared as `&'static [TermDef]` slices inside each vocabulary
//! module and materialized into a [`VocabularyTable`] the first time the
//! table is requested. The top-level entry point is
//! [`Registry::full()`](crate::Registry::full).

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::sync::OnceLock;

use sophia::iri::Iri;

use crate::error::VocabularyError;

/// Whether a term names an RDFS class or an RDF property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TermKind {
    /// `rdfs:Class`.
    Class,
    /// `rdf:Property`.
    Property,
}

impl TermKind {
    /// Returns the full IRI of the RDF Schema type for this kind.
    #[must_use]
    pub fn type_iri(self) -> &'static str {
        match self {
            TermKind::Class => iris::RDFS_CLASS,
            TermKind::Property => iris::RDF_PROPERTY,
        }
    }
}

/// Static declaration of one term, as written in a vocabulary module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermDef {
    /// Local name (e.g., `"title"`).
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description, when the source schema carries one.
    pub comment: Option<&'static str>,
    /// Class or property.
    pub kind: TermKind,
}

impl TermDef {
    /// Declares a class.
    #[must_use]
    pub const fn class(
        name: &'static str,
        label: &'static str,
        comment: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            label,
            comment,
            kind: TermKind::Class,
        }
    }

    /// Declares a property.
    #[must_use]
    pub const fn property(
        name: &'static str,
        label: &'static str,
        comment: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            label,
            comment,
            kind: TermKind::Property,
        }
    }
}

/// A materialized term: the declaration plus its full identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Term {
    /// Local name.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Optional description.
    pub comment: Option<&'static str>,
    /// Class or property.
    pub kind: TermKind,
    /// Namespace concatenated with the local name.
    pub iri: String,
}

impl Term {
    /// Builds a term by concatenating `namespace` and the declared local name.
    #[must_use]
    pub fn new(namespace: &str, def: &TermDef) -> Self {
        let mut iri = String::with_capacity(namespace.len() + def.name.len());
        iri.push_str(namespace);
        iri.push_str(def.name);
        Self {
            name: def.name,
            label: def.label,
            comment: def.comment,
            kind: def.kind,
            iri,
        }
    }

    /// Returns true if the identifier is a syntactically valid absolute IRI.
    #[must_use]
    pub fn is_valid_iri(&self) -> bool {
        Iri::new(self.iri.as_str()).is_ok()
    }
}

/// Immutable mapping from term name to [`Term`], ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyTable {
    namespace: &'static str,
    terms: BTreeMap<&'static str, Term>,
}

impl VocabularyTable {
    /// Materializes `terms` under `namespace`.
    ///
    /// A later declaration of the same name replaces an earlier one;
    /// [`Vocabulary::validate`] rejects such duplicates in the shipped tables.
    #[must_use]
    pub fn from_terms(namespace: &'static str, terms: &'static [TermDef]) -> Self {
        let terms = terms
            .iter()
            .map(|def| (def.name, Term::new(namespace, def)))
            .collect();
        Self { namespace, terms }
    }

    /// Composes a base table with an extension table.
    ///
    /// The result keeps the base namespace and contains every term of both
    /// tables. A name defined by both with the same identifier is kept once.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::Conflict`] if both tables define the same
    /// name with different identifiers.
    pub fn compose(base: &Self, extension: &Self) -> Result<Self, VocabularyError> {
        for (name, term) in &extension.terms {
            if let Some(existing) = base.terms.get(name) {
                if existing.iri != term.iri {
                    return Err(VocabularyError::Conflict {
                        name: (*name).to_owned(),
                        existing: existing.iri.clone(),
                        proposed: term.iri.clone(),
                    });
                }
            }
        }
        Ok(Self::merge(base, extension))
    }

    fn merge(base: &Self, extension: &Self) -> Self {
        let mut terms = base.terms.clone();
        for (name, term) in &extension.terms {
            terms.entry(*name).or_insert_with(|| term.clone());
        }
        Self {
            namespace: base.namespace,
            terms,
        }
    }

    /// The namespace IRI shared by the terms of this table.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Looks up a term by local name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.terms.get(name)
    }

    /// Looks up the full identifier of a term by local name.
    #[must_use]
    pub fn iri(&self, name: &str) -> Option<&str> {
        self.terms.get(name).map(|t| t.iri.as_str())
    }

    /// Returns true if the table defines `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.terms.contains_key(name)
    }

    /// Iterates over all terms, ordered by local name.
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    /// Iterates over the terms of one kind, ordered by local name.
    pub fn of_kind(&self, kind: TermKind) -> impl Iterator<Item = &Term> {
        self.terms.values().filter(move |t| t.kind == kind)
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the table has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Static descriptor of one ontology source file.
///
/// Vocabularies are declared as `static` items; the table is built on first
/// access and lives for the rest of the process.
#[derive(Debug)]
pub struct Vocabulary {
    /// Registry name (e.g., `"dc"`, `"filesource"`).
    pub name: &'static str,
    /// Preferred prefix used in serialized documents.
    pub prefix: &'static str,
    /// Namespace IRI.
    pub namespace: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// File name of the `.rdfs` schema the table was generated from.
    pub source: &'static str,
    /// Name of the bundled schema resource, if this vocabulary has a loader.
    pub resource: Option<&'static str>,
    /// Vocabulary this one extends, if any.
    pub base: Option<&'static Vocabulary>,
    /// Term declarations, excluding those inherited from `base`.
    pub terms: &'static [TermDef],
    table: OnceLock<VocabularyTable>,
}

impl Vocabulary {
    /// Declares a standalone vocabulary.
    #[must_use]
    pub const fn new(
        name: &'static str,
        prefix: &'static str,
        namespace: &'static str,
        label: &'static str,
        source: &'static str,
        terms: &'static [TermDef],
    ) -> Self {
        Self {
            name,
            prefix,
            namespace,
            label,
            source,
            resource: None,
            base: None,
            terms,
            table: OnceLock::new(),
        }
    }

    /// Attaches a bundled schema resource.
    #[must_use]
    pub const fn with_resource(mut self, resource: &'static str) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Marks this vocabulary as an extension of `base`.
    #[must_use]
    pub const fn extending(mut self, base: &'static Vocabulary) -> Self {
        self.base = Some(base);
        self
    }

    /// Returns the table for this vocabulary, including inherited terms.
    #[must_use]
    pub fn table(&'static self) -> &'static VocabularyTable {
        self.table.get_or_init(|| {
            let own = VocabularyTable::from_terms(self.namespace, self.terms);
            match self.base {
                Some(base) => VocabularyTable::merge(base.table(), &own),
                None => own,
            }
        })
    }

    /// Looks up the full identifier of a term by local name.
    #[must_use]
    pub fn iri(&'static self, name: &str) -> Option<&'static str> {
        self.table().iri(name)
    }

    /// Returns the bundled resources to load for this vocabulary, base first.
    #[must_use]
    pub fn resources(&self) -> Vec<&'static str> {
        let mut chain = self.base.map(|b| b.resources()).unwrap_or_default();
        if let Some(resource) = self.resource {
            chain.push(resource);
        }
        chain
    }

    /// Checks the declarations of this vocabulary.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a local name declared twice, an
    /// identifier that is not a valid absolute IRI, an extension whose
    /// namespace differs from its base, or a composition conflict.
    pub fn validate(&'static self) -> Result<(), VocabularyError> {
        let mut seen = HashSet::new();
        for def in self.terms {
            if !seen.insert(def.name) {
                return Err(VocabularyError::DuplicateTerm {
                    vocabulary: self.name,
                    name: def.name.to_owned(),
                });
            }
        }

        let own = VocabularyTable::from_terms(self.namespace, self.terms);
        if let Some(term) = own.iter().find(|t| !t.is_valid_iri()) {
            return Err(VocabularyError::InvalidIri {
                iri: term.iri.clone(),
            });
        }

        if let Some(base) = self.base {
            if base.namespace != self.namespace {
                return Err(VocabularyError::NamespaceMismatch {
                    extension: self.name,
                    expected: base.namespace,
                    found: self.namespace,
                });
            }
            base.validate()?;
            VocabularyTable::compose(base.table(), &own)?;
        }
        Ok(())
    }
}

/// Standard IRI constants shared by the serializers and the writer.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `rdfs:Class`.
    pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:isDefinedBy`.
    pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:AnnotationProperty`.
    pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
}
