//! `dcterms` vocabulary: DCMI Metadata Terms.
//!
//! Generated by `vocab-writer` from `dcterms.rdfs`. Do not edit by hand.

use crate::model::{TermDef, Vocabulary, VocabularyTable};

/// Namespace IRI.
pub const NS: &str = "http://purl.org/dc/terms/";

/// Term declarations, classes first.
#[rustfmt::skip]
pub static TERMS: &[TermDef] = &[
    TermDef::class("Agent", "Agent", Some("A resource that acts or has the power to act.")),
    TermDef::class("FileFormat", "File Format", Some("A digital resource format.")),
    TermDef::class("LicenseDocument", "License Document", Some("A legal document giving official permission to do something with a resource.")),
    TermDef::class("Location", "Location", Some("A spatial region or named place.")),
    TermDef::class("MediaType", "Media Type", Some("A file format or physical medium.")),
    TermDef::class("PeriodOfTime", "Period of Time", Some("An interval of time that is named or defined by its start and end dates.")),
    TermDef::property("abstract", "Abstract", Some("A summary of the resource.")),
    TermDef::property("accessRights", "Access Rights", Some("Information about who can access the resource or an indication of its security status.")),
    TermDef::property("alternative", "Alternative Title", Some("An alternative name for the resource.")),
    TermDef::property("available", "Date Available", Some("Date that the resource became or will become available.")),
    TermDef::property("bibliographicCitation", "Bibliographic Citation", Some("A bibliographic reference for the resource.")),
    TermDef::property("conformsTo", "Conforms To", Some("An established standard to which the described resource conforms.")),
    TermDef::property("created", "Date Created", Some("Date of creation of the resource.")),
    TermDef::property("dateAccepted", "Date Accepted", Some("Date of acceptance of the resource.")),
    TermDef::property("dateCopyrighted", "Date Copyrighted", Some("Date of copyright of the resource.")),
    TermDef::property("dateSubmitted", "Date Submitted", Some("Date of submission of the resource.")),
    TermDef::property("extent", "Extent", Some("The size or duration of the resource.")),
    TermDef::property("hasPart", "Has Part", Some("A related resource that is included either physically or logically in the described resource.")),
    TermDef::property("hasVersion", "Has Version", Some("A related resource that is a version, edition, or adaptation of the described resource.")),
    TermDef::property("isPartOf", "Is Part Of", Some("A related resource in which the described resource is physically or logically included.")),
    TermDef::property("isVersionOf", "Is Version Of", Some("A related resource of which the described resource is a version, edition, or adaptation.")),
    TermDef::property("issued", "Date Issued", Some("Date of formal issuance of the resource.")),
    TermDef::property("license", "License", Some("A legal document giving official permission to do something with the resource.")),
    TermDef::property("modified", "Date Modified", Some("Date on which the resource was changed.")),
    TermDef::property("references", "References", Some("A related resource that is referenced, cited, or otherwise pointed to by the described resource.")),
    TermDef::property("spatial", "Spatial Coverage", Some("Spatial characteristics of the resource.")),
    TermDef::property("temporal", "Temporal Coverage", Some("Temporal characteristics of the resource.")),
    TermDef::property("valid", "Date Valid", Some("Date (often a range) of validity of a resource.")),
];

/// The `dcterms` vocabulary descriptor.
#[rustfmt::skip]
pub static VOCABULARY: Vocabulary = Vocabulary::new(
    "dcterms",
    "dcterms",
    NS,
    "DCMI Metadata Terms",
    "dcterms.rdfs",
    TERMS,
);

/// Returns the `dcterms` table.
#[must_use]
pub fn table() -> &'static VocabularyTable {
    VOCABULARY.table()
}

/// Looks up the full identifier of a term by local name.
#[must_use]
pub fn iri(name: &str) -> Option<&'static str> {
    VOCABULARY.iri(name)
}
