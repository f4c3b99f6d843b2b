//! `dc` vocabulary: Dublin Core Metadata Element Set, Version 1.1.
//!
//! The fifteen classic Dublin Core elements, used for titles, creators and
//! dates of desktop resources.
//!
//! Generated by `vocab-writer` from `dc.rdfs`. Do not edit by hand.

use crate::model::{TermDef, Vocabulary, VocabularyTable};

/// Namespace IRI.
pub const NS: &str = "http://purl.org/dc/elements/1.1/";

/// Term declarations, classes first.
#[rustfmt::skip]
pub static TERMS: &[TermDef] = &[
    TermDef::property("contributor", "Contributor", Some("An entity responsible for making contributions to the resource.")),
    TermDef::property("coverage", "Coverage", Some("The spatial or temporal topic of the resource, the spatial applicability of the resource, or the jurisdiction under which the resource is relevant.")),
    TermDef::property("creator", "Creator", Some("An entity primarily responsible for making the resource.")),
    TermDef::property("date", "Date", Some("A point or period of time associated with an event in the lifecycle of the resource.")),
    TermDef::property("description", "Description", Some("An account of the resource.")),
    TermDef::property("format", "Format", Some("The file format, physical medium, or dimensions of the resource.")),
    TermDef::property("identifier", "Identifier", Some("An unambiguous reference to the resource within a given context.")),
    TermDef::property("language", "Language", Some("A language of the resource.")),
    TermDef::property("publisher", "Publisher", Some("An entity responsible for making the resource available.")),
    TermDef::property("relation", "Relation", Some("A related resource.")),
    TermDef::property("rights", "Rights", Some("Information about rights held in and over the resource.")),
    TermDef::property("source", "Source", Some("A related resource from which the described resource is derived.")),
    TermDef::property("subject", "Subject", Some("The topic of the resource.")),
    TermDef::property("title", "Title", Some("A name given to the resource.")),
    TermDef::property("type", "Type", Some("The nature or genre of the resource.")),
];

/// The `dc` vocabulary descriptor.
#[rustfmt::skip]
pub static VOCABULARY: Vocabulary = Vocabulary::new(
    "dc",
    "dc",
    NS,
    "Dublin Core Metadata Element Set, Version 1.1",
    "dc.rdfs",
    TERMS,
);

/// Returns the `dc` table.
#[must_use]
pub fn table() -> &'static VocabularyTable {
    VOCABULARY.table()
}

/// Looks up the full identifier of a term by local name.
#[must_use]
pub fn iri(name: &str) -> Option<&'static str> {
    VOCABULARY.iri(name)
}
