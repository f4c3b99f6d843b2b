//! `data` vocabulary: Desktop data objects.
//!
//! Data objects extracted from desktop sources: files, folders, archive
//! members, attachments and messages, with their basic metadata.
//!
//! Generated by `vocab-writer` from `data.rdfs`. Do not edit by hand.

use crate::model::{TermDef, Vocabulary, VocabularyTable};

/// Namespace IRI.
pub const NS: &str = "http://aperture.semanticdesktop.org/ontology/data#";

/// Term declarations, classes first.
#[rustfmt::skip]
pub static TERMS: &[TermDef] = &[
    TermDef::class("ArchiveItem", "Archive Item", Some("A data object stored inside an archive such as a zip or tar file.")),
    TermDef::class("Attachment", "Attachment", Some("A data object that is attached to a message.")),
    TermDef::class("DataObject", "Data Object", Some("A resource obtained from a data source, together with its metadata.")),
    TermDef::class("FileDataObject", "File Data Object", Some("A data object backed by a file.")),
    TermDef::class("FolderDataObject", "Folder Data Object", Some("A data object representing a folder or directory.")),
    TermDef::class("Message", "Message", Some("A data object representing an email or other message.")),
    TermDef::property("accessed", "accessed", Some("The date and time the data object was last accessed.")),
    TermDef::property("bcc", "bcc", Some("A blind carbon copy recipient of a message.")),
    TermDef::property("byteSize", "byte size", Some("The size of the data object in bytes.")),
    TermDef::property("cc", "cc", Some("A carbon copy recipient of a message.")),
    TermDef::property("characterSet", "character set", Some("The character set used to encode the content of the data object.")),
    TermDef::property("created", "created", Some("The date and time the data object was created.")),
    TermDef::property("from", "from", Some("The sender of a message.")),
    TermDef::property("fullText", "full text", Some("The plain text extracted from the content of the data object.")),
    TermDef::property("generator", "generator", Some("The application that produced the content of the data object.")),
    TermDef::property("linksTo", "links to", Some("A resource referenced by a hyperlink in the content of the data object.")),
    TermDef::property("messageId", "message id", Some("The message identifier of a message.")),
    TermDef::property("mimeType", "MIME type", Some("The MIME type of the content of the data object.")),
    TermDef::property("modified", "modified", Some("The date and time the data object was last modified.")),
    TermDef::property("name", "name", Some("The name of the data object, usually its file name.")),
    TermDef::property("pageCount", "page count", Some("The number of pages of a paginated document.")),
    TermDef::property("partOf", "part of", Some("The data object that contains this one, such as the enclosing folder or archive.")),
    TermDef::property("rootFolderOf", "root folder of", Some("Links a root folder to the data source it was crawled from.")),
    TermDef::property("to", "to", Some("A primary recipient of a message.")),
];

/// The `data` vocabulary descriptor.
#[rustfmt::skip]
pub static VOCABULARY: Vocabulary = Vocabulary::new(
    "data",
    "data",
    NS,
    "Desktop data objects",
    "data.rdfs",
    TERMS,
)
.with_resource("data.rdfs");

/// Returns the `data` table.
#[must_use]
pub fn table() -> &'static VocabularyTable {
    VOCABULARY.table()
}

/// Looks up the full identifier of a term by local name.
#[must_use]
pub fn iri(name: &str) -> Option<&'static str> {
    VOCABULARY.iri(name)
}
