//! `filesource` vocabulary: File and web data source description.
//!
//! Extends the data source description with the parameters of file-system and
//! web data sources, sharing its namespace.
//!
//! Generated by `vocab-writer` from `source2.rdfs`. Do not edit by hand.

use crate::model::{TermDef, Vocabulary, VocabularyTable};

/// Namespace IRI.
pub const NS: &str = "http://aperture.semanticdesktop.org/ontology/2007/08/12/source#";

/// Term declarations, classes first.
#[rustfmt::skip]
pub static TERMS: &[TermDef] = &[
    TermDef::class("FileSystemDataSource", "File System Data Source", Some("A data source that crawls a folder tree of the local file system.")),
    TermDef::class("WebDataSource", "Web Data Source", Some("A data source that crawls a website starting from a root URL.")),
    TermDef::property("followSymbolicLinks", "follow symbolic links", Some("Whether symbolic links are followed while crawling.")),
    TermDef::property("includeEmbeddedResources", "include embedded resources", Some("Whether resources embedded in web pages are crawled as well.")),
    TermDef::property("includeHiddenResources", "include hidden resources", Some("Whether hidden files and folders are crawled.")),
    TermDef::property("maxDepth", "maximum depth", Some("The maximum depth of the folder tree or link graph to crawl.")),
    TermDef::property("rootFolder", "root folder", Some("The folder at which a file system crawl starts.")),
    TermDef::property("rootUrl", "root URL", Some("The URL at which a web crawl starts.")),
    TermDef::property("suppressParentChildLinks", "suppress parent-child links", Some("Whether partOf links between folders and their children are omitted.")),
];

/// The `filesource` vocabulary descriptor.
#[rustfmt::skip]
pub static VOCABULARY: Vocabulary = Vocabulary::new(
    "filesource",
    "source",
    NS,
    "File and web data source description",
    "source2.rdfs",
    TERMS,
)
.with_resource("source2.rdfs")
.extending(&super::source::VOCABULARY);

/// Returns the `filesource` table.
#[must_use]
pub fn table() -> &'static VocabularyTable {
    VOCABULARY.table()
}

/// Looks up the full identifier of a term by local name.
#[must_use]
pub fn iri(name: &str) -> Option<&'static str> {
    VOCABULARY.iri(name)
}
