//! Vocabulary manifest: which schemas to generate, under what names, and in
//! what order.
//!
//! ```toml
//! [[vocabulary]]
//! name = "source"
//! schema = "resources/source.rdfs"
//! resource = true
//!
//! [[vocabulary]]
//! name = "filesource"
//! prefix = "source"
//! schema = "resources/source2.rdfs"
//! resource = true
//! extends = "source"
//! ```
//!
//! Schema paths are relative to the manifest file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::vocabulary::ModuleOptions;

/// A parsed vocabulary manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Vocabularies in generation order.
    #[serde(rename = "vocabulary", default)]
    pub vocabularies: Vec<ManifestEntry>,
}

/// One vocabulary to generate.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Module and registry name.
    pub name: String,
    /// Conventional prefix; defaults to `name`.
    pub prefix: Option<String>,
    /// Schema document, relative to the manifest.
    pub schema: PathBuf,
    /// Whether the schema ships as a loadable resource.
    #[serde(default)]
    pub resource: bool,
    /// Name of an earlier vocabulary this one extends.
    pub extends: Option<String>,
    /// Namespace IRI; detected from the schema when omitted.
    pub namespace: Option<String>,
}

impl ManifestEntry {
    /// File name of the schema document.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema path has no UTF-8 file name.
    pub fn file_name(&self) -> Result<&str> {
        self.schema
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Schema path {} has no file name", self.schema.display()))
    }

    /// Module options for this entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema path has no UTF-8 file name.
    pub fn module_options(&self) -> Result<ModuleOptions> {
        let file_name = self.file_name()?;
        Ok(ModuleOptions {
            name: self.name.clone(),
            prefix: self.prefix.clone().unwrap_or_else(|| self.name.clone()),
            source: file_name.to_owned(),
            resource: self.resource.then(|| file_name.to_owned()),
            base: self.extends.clone(),
        })
    }
}

impl Manifest {
    /// Parses a manifest document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid manifest: bad TOML, no
    /// vocabulary, a repeated name, or an `extends` that does not name an
    /// earlier vocabulary.
    pub fn parse(text: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(text).context("Invalid vocabulary manifest")?;
        manifest.check()?;
        Ok(manifest)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("In manifest {}", path.display()))
    }

    fn check(&self) -> Result<()> {
        if self.vocabularies.is_empty() {
            bail!("Manifest declares no vocabulary");
        }
        let mut seen = HashSet::new();
        for entry in &self.vocabularies {
            if let Some(base) = &entry.extends {
                if !seen.contains(base.as_str()) {
                    bail!(
                        "Vocabulary `{}` extends `{base}`, which is not declared before it",
                        entry.name
                    );
                }
            }
            if !seen.insert(entry.name.as_str()) {
                bail!("Vocabulary `{}` is declared twice", entry.name);
            }
        }
        Ok(())
    }
}
