//! `tags` vocabulary: Tag ontology.
//!
//! Tags and taggings: who attached which tag to which resource, and when.
//!
//! Generated by `vocab-writer` from `tags.rdfs`. Do not edit by hand.

use crate::model::{TermDef, Vocabulary, VocabularyTable};

/// Namespace IRI.
pub const NS: &str = "http://www.holygoat.co.uk/owl/redwood/0.1/tags/";

/// Term declarations, classes first.
#[rustfmt::skip]
pub static TERMS: &[TermDef] = &[
    TermDef::class("RestrictedTagging", "Restricted Tagging", Some("A tagging which has exactly one associated tag.")),
    TermDef::class("Tag", "Tag", Some("A natural-language concept which is used to annotate another resource.")),
    TermDef::class("Tagging", "Tagging", Some("The relationship between a resource and a tag, made by an agent at a time.")),
    TermDef::property("associatedTag", "associated tag", Some("Indicates that a tag is associated with a tagging.")),
    TermDef::property("equivalentTag", "equivalent tag", Some("Indicates that two tags denote the same concept.")),
    TermDef::property("isTagOf", "is tag of", Some("Indicates that a tag has been used to annotate a resource.")),
    TermDef::property("relatedTag", "related tag", Some("Indicates that two tags are related.")),
    TermDef::property("tagName", "tag name", Some("The name of a tag.")),
    TermDef::property("taggedBy", "tagged by", Some("The agent who performed a tagging.")),
    TermDef::property("taggedOn", "tagged on", Some("The time at which a tagging was performed.")),
    TermDef::property("taggedResource", "tagged resource", Some("The resource that a tagging annotates.")),
    TermDef::property("taggedWithTag", "tagged with tag", Some("Indicates that a resource has been tagged with a tag.")),
];

/// The `tags` vocabulary descriptor.
#[rustfmt::skip]
pub static VOCABULARY: Vocabulary = Vocabulary::new(
    "tags",
    "tags",
    NS,
    "Tag ontology",
    "tags.rdfs",
    TERMS,
)
.with_resource("tags.rdfs");

/// Returns the `tags` table.
#[must_use]
pub fn table() -> &'static VocabularyTable {
    VOCABULARY.table()
}

/// Looks up the full identifier of a term by local name.
#[must_use]
pub fn iri(name: &str) -> Option<&'static str> {
    VOCABULARY.iri(name)
}
