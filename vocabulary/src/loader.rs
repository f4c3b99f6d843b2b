//! Loads bundled schema documents into a caller-supplied RDF graph.
//!
//! Resources are located through an injected [`ResourceLocator`]: the
//! documents compiled into this crate ([`EmbeddedResources`]), a directory on
//! disk ([`DirectoryResources`]), or any closure. Every resource of a
//! vocabulary is parsed into a private staging graph first, so the caller's
//! graph is untouched unless all of them parse.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use sophia::api::prelude::*;
use sophia::inmem::graph::FastGraph;

use crate::error::LoadError;
use crate::model::Vocabulary;

/// A reader over one resource.
pub type ResourceReader<'a> = Box<dyn BufRead + 'a>;

/// Finds schema resources by name.
pub trait ResourceLocator {
    /// Opens the resource called `name`.
    ///
    /// Returns `Ok(None)` if no such resource exists.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the resource exists but cannot be opened.
    fn open(&self, name: &str) -> io::Result<Option<ResourceReader<'_>>>;
}

impl<F> ResourceLocator for F
where
    F: Fn(&str) -> io::Result<Option<ResourceReader<'static>>>,
{
    fn open(&self, name: &str) -> io::Result<Option<ResourceReader<'_>>> {
        self(name)
    }
}

const EMBEDDED: &[(&str, &str)] = &[
    ("data.rdfs", include_str!("../resources/data.rdfs")),
    ("geo.rdfs", include_str!("../resources/geo.rdfs")),
    ("source.rdfs", include_str!("../resources/source.rdfs")),
    ("source2.rdfs", include_str!("../resources/source2.rdfs")),
    ("tags.rdfs", include_str!("../resources/tags.rdfs")),
];

/// The schema documents compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    /// Returns the content of an embedded resource.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        EMBEDDED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, content)| *content)
    }

    /// Names of all embedded resources.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(n, _)| *n)
    }
}

impl ResourceLocator for EmbeddedResources {
    fn open(&self, name: &str) -> io::Result<Option<ResourceReader<'_>>> {
        Ok(self
            .get(name)
            .map(|content| Box::new(content.as_bytes()) as ResourceReader<'_>))
    }
}

/// Schema documents stored as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Locates resources relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceLocator for DirectoryResources {
    fn open(&self, name: &str) -> io::Result<Option<ResourceReader<'_>>> {
        let path = self.root.join(name);
        match File::open(&path) {
            Ok(file) => Ok(Some(Box::new(BufReader::new(file)) as ResourceReader<'_>)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// RDF syntax of a resource, chosen from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFormat {
    /// RDF/XML (`.rdfs`, `.rdf`, `.owl`, `.xml`).
    RdfXml,
    /// Turtle (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
}

impl ResourceFormat {
    /// Guesses the format of a resource from its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "rdfs" | "rdf" | "owl" | "xml" => Some(Self::RdfXml),
            "ttl" => Some(Self::Turtle),
            "nt" => Some(Self::NTriples),
            _ => None,
        }
    }
}

/// Parses `reader` as `format` into `graph`.
///
/// # Errors
///
/// Returns the parser or graph error, boxed.
pub fn parse_into<R: BufRead>(
    reader: R,
    format: ResourceFormat,
    graph: &mut FastGraph,
) -> Result<usize, crate::error::BoxError> {
    let added = match format {
        ResourceFormat::RdfXml => sophia::xml::parser::parse_bufread(reader).add_to_graph(graph)?,
        ResourceFormat::Turtle => {
            sophia::turtle::parser::turtle::parse_bufread(reader).add_to_graph(graph)?
        }
        ResourceFormat::NTriples => {
            sophia::turtle::parser::nt::parse_bufread(reader).add_to_graph(graph)?
        }
    };
    Ok(added)
}

/// Loads the bundled schema of `vocabulary` into `graph`.
///
/// For an extension the base schema is loaded too, base first. Returns the
/// number of triples inserted into `graph`.
///
/// # Errors
///
/// - [`LoadError::NoResource`] if the vocabulary ships no schema.
/// - [`LoadError::ResourceNotFound`] if the locator has no such resource.
/// - [`LoadError::Io`] if the resource exists but cannot be opened.
/// - [`LoadError::Parse`] if a resource cannot be read or parsed.
/// - [`LoadError::Insert`] if `graph` rejects the parsed triples.
///
/// `graph` is unchanged when any of the first four is returned.
pub fn load_ontology<L, G>(
    vocabulary: &Vocabulary,
    locator: &L,
    graph: &mut G,
) -> Result<usize, LoadError>
where
    L: ResourceLocator + ?Sized,
    G: MutableGraph,
    G::MutationError: Send + Sync + 'static,
{
    let resources = vocabulary.resources();
    if resources.is_empty() {
        return Err(LoadError::NoResource {
            vocabulary: vocabulary.name,
        });
    }

    let mut staged = FastGraph::new();
    for resource in resources {
        stage(resource, locator, &mut staged)?;
    }

    let inserted = graph
        .insert_all(staged.triples())
        .map_err(|err| LoadError::Insert {
            source: Box::new(err),
        })?;
    tracing::info!(
        vocabulary = vocabulary.name,
        triples = inserted,
        "loaded ontology"
    );
    Ok(inserted)
}

fn stage<L>(resource: &str, locator: &L, staged: &mut FastGraph) -> Result<(), LoadError>
where
    L: ResourceLocator + ?Sized,
{
    let reader = locator
        .open(resource)
        .map_err(|source| LoadError::Io {
            resource: resource.to_owned(),
            source,
        })?
        .ok_or_else(|| LoadError::ResourceNotFound {
            resource: resource.to_owned(),
        })?;
    let format = ResourceFormat::from_name(resource).ok_or_else(|| LoadError::Parse {
        resource: resource.to_owned(),
        source: format!("unrecognized RDF syntax for '{resource}'").into(),
    })?;
    tracing::debug!(resource, ?format, "parsing ontology resource");

    let added = parse_into(reader, format, staged).map_err(|source| LoadError::Parse {
        resource: resource.to_owned(),
        source,
    })?;
    tracing::debug!(resource, triples = added, "staged ontology resource");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(ResourceFormat::from_name("geo.rdfs"), Some(ResourceFormat::RdfXml));
        assert_eq!(ResourceFormat::from_name("x/onto.OWL"), Some(ResourceFormat::RdfXml));
        assert_eq!(ResourceFormat::from_name("dump.ttl"), Some(ResourceFormat::Turtle));
        assert_eq!(ResourceFormat::from_name("dump.nt"), Some(ResourceFormat::NTriples));
        assert_eq!(ResourceFormat::from_name("notes.txt"), None);
        assert_eq!(ResourceFormat::from_name("README"), None);
    }

    #[test]
    fn embedded_resources_are_listed() {
        let names: Vec<_> = EmbeddedResources.names().collect();
        assert_eq!(
            names,
            vec!["data.rdfs", "geo.rdfs", "source.rdfs", "source2.rdfs", "tags.rdfs"]
        );
        assert!(EmbeddedResources.get("dc.rdfs").is_none());
    }

    #[test]
    fn embedded_open_missing_is_none() {
        assert!(EmbeddedResources.open("missing.rdfs").unwrap().is_none());
        assert!(EmbeddedResources.open("geo.rdfs").unwrap().is_some());
    }

    #[test]
    fn directory_open_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let locator = DirectoryResources::new(dir.path());
        assert!(locator.open("geo.rdfs").unwrap().is_none());
        std::fs::write(dir.path().join("geo.rdfs"), "<rdf:RDF/>").unwrap();
        assert!(locator.open("geo.rdfs").unwrap().is_some());
    }
}
