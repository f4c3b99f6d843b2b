//! `source` vocabulary: Data source description.
//!
//! Configuration of data sources: connection parameters, credentials, crawl
//! limits and inclusion patterns.
//!
//! Generated by `vocab-writer` from `source.rdfs`. Do not edit by hand.

use crate::model::{TermDef, Vocabulary, VocabularyTable};

/// Namespace IRI.
pub const NS: &str = "http://aperture.semanticdesktop.org/ontology/2007/08/12/source#";

/// Term declarations, classes first.
#[rustfmt::skip]
pub static TERMS: &[TermDef] = &[
    TermDef::class("ConnectionSecurity", "Connection Security", Some("The kind of transport security used to connect to a data source.")),
    TermDef::class("DataSource", "Data Source", Some("A configured source of data objects, such as a folder, a mailbox or a website.")),
    TermDef::class("Pattern", "Pattern", Some("A pattern matched against the identifiers of data objects.")),
    TermDef::class("RegExpPattern", "Regular Expression Pattern", Some("A pattern interpreted as a regular expression.")),
    TermDef::class("SubstringPattern", "Substring Pattern", Some("A pattern matched as a plain substring.")),
    TermDef::property("basepath", "base path", Some("The path on the host under which data objects are located.")),
    TermDef::property("condition", "condition", Some("How a substring pattern is matched: starts with, ends with, or contains.")),
    TermDef::property("connectionSecurity", "connection security", Some("The transport security used to connect to the data source.")),
    TermDef::property("crawlInterval", "crawl interval", Some("The interval between two crawls of the data source, in minutes.")),
    TermDef::property("dataSourceComment", "data source comment", Some("A free-text description of the data source.")),
    TermDef::property("dataSourceName", "data source name", Some("A human-readable name of the data source.")),
    TermDef::property("excludePattern", "exclude pattern", Some("A pattern; data objects matching it are skipped.")),
    TermDef::property("hostname", "host name", Some("The name of the host serving the data source.")),
    TermDef::property("includePattern", "include pattern", Some("A pattern; only data objects matching it are crawled.")),
    TermDef::property("lastCrawled", "last crawled", Some("The date and time the data source was last crawled.")),
    TermDef::property("maxByteSize", "maximum byte size", Some("Data objects larger than this number of bytes are skipped.")),
    TermDef::property("password", "password", Some("The password used to authenticate with the data source.")),
    TermDef::property("port", "port", Some("The port number on which the data source is served.")),
    TermDef::property("username", "user name", Some("The user name used to authenticate with the data source.")),
];

/// The `source` vocabulary descriptor.
#[rustfmt::skip]
pub static VOCABULARY: Vocabulary = Vocabulary::new(
    "source",
    "source",
    NS,
    "Data source description",
    "source.rdfs",
    TERMS,
)
.with_resource("source.rdfs");

/// Returns the `source` table.
#[must_use]
pub fn table() -> &'static VocabularyTable {
    VOCABULARY.table()
}

/// Looks up the full identifier of a term by local name.
#[must_use]
pub fn iri(name: &str) -> Option<&'static str> {
    VOCABULARY.iri(name)
}
