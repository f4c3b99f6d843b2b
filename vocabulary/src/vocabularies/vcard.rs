//! `vcard` vocabulary: vCard in RDF.
//!
//! Contact information for people and organizations, following the vCard (RFC
//! 2426) structure.
//!
//! Generated by `vocab-writer` from `vcard.rdfs`. Do not edit by hand.

use crate::model::{TermDef, Vocabulary, VocabularyTable};

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2006/vcard/ns#";

/// Term declarations, classes first.
#[rustfmt::skip]
pub static TERMS: &[TermDef] = &[
    TermDef::class("Address", "Address", Some("An address, either postal or delivery.")),
    TermDef::class("Email", "Email", Some("An electronic mail address.")),
    TermDef::class("Name", "Name", Some("The structured name of the object the vCard describes.")),
    TermDef::class("Organization", "Organization", Some("An organization, with its name and organizational units.")),
    TermDef::class("Tel", "Tel", Some("A telephone number.")),
    TermDef::class("VCard", "VCard", Some("Resources that are vCards and the URIs that denote these vCards can also be the same URIs that denote people/orgs.")),
    TermDef::property("additional-name", "additional name", None),
    TermDef::property("adr", "address", Some("A postal or delivery address of the object the vCard represents.")),
    TermDef::property("agent", "agent", None),
    TermDef::property("bday", "birthday", Some("The birth date of the object the vCard represents.")),
    TermDef::property("category", "category", None),
    TermDef::property("class", "class", None),
    TermDef::property("country-name", "country name", None),
    TermDef::property("email", "email", Some("An email address of the object the vCard represents.")),
    TermDef::property("extended-address", "extended address", None),
    TermDef::property("family-name", "family name", None),
    TermDef::property("fn", "formatted name", Some("A formatted name of the object the vCard represents.")),
    TermDef::property("geo", "geo", Some("Geographical position of the object the vCard represents.")),
    TermDef::property("given-name", "given name", None),
    TermDef::property("honorific-prefix", "honorific prefix", None),
    TermDef::property("honorific-suffix", "honorific suffix", None),
    TermDef::property("key", "key", None),
    TermDef::property("label", "label", Some("A formatted text corresponding to a delivery address.")),
    TermDef::property("latitude", "latitude", None),
    TermDef::property("locality", "locality", None),
    TermDef::property("logo", "logo", None),
    TermDef::property("longitude", "longitude", None),
    TermDef::property("mailer", "mailer", None),
    TermDef::property("n", "name", Some("The structured name of the object the vCard represents.")),
    TermDef::property("nickname", "nickname", None),
    TermDef::property("note", "note", None),
    TermDef::property("org", "organization", Some("An organization of the object the vCard represents.")),
    TermDef::property("organization-name", "organization name", None),
    TermDef::property("organization-unit", "organizational unit", None),
    TermDef::property("photo", "photo", None),
    TermDef::property("post-office-box", "post office box", None),
    TermDef::property("postal-code", "postal code", None),
    TermDef::property("region", "region", None),
    TermDef::property("rev", "revision", None),
    TermDef::property("role", "role", None),
    TermDef::property("sort-string", "sort string", None),
    TermDef::property("sound", "sound", None),
    TermDef::property("street-address", "street address", None),
    TermDef::property("tel", "telephone", Some("A telephone number of the object the vCard represents.")),
    TermDef::property("title", "title", None),
    TermDef::property("tz", "timezone", None),
    TermDef::property("uid", "uid", None),
    TermDef::property("url", "url", Some("A URL associated with the object the vCard represents.")),
];

/// The `vcard` vocabulary descriptor.
#[rustfmt::skip]
pub static VOCABULARY: Vocabulary = Vocabulary::new(
    "vcard",
    "vcard",
    NS,
    "vCard in RDF",
    "vcard.rdfs",
    TERMS,
);

/// Returns the `vcard` table.
#[must_use]
pub fn table() -> &'static VocabularyTable {
    VOCABULARY.table()
}

/// Looks up the full identifier of a term by local name.
#[must_use]
pub fn iri(name: &str) -> Option<&'static str> {
    VOCABULARY.iri(name)
}
