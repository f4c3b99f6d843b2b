//! semdesk vocabulary writer.
//!
//! Reads RDF Schema (`.rdfs`) documents and generates the vocabulary table
//! modules of `semdesk-vocabulary`: one module per schema declaring every
//! class and property as a static term, plus a `mod.rs` listing them.
//!
//! Two entry points:
//! - [`generate_from_manifest`] follows a [`manifest::Manifest`] naming each
//!   module, its resource and its base. The bundled modules are generated
//!   this way from `vocabulary/vocabularies.toml`.
//! - [`generate`] walks a directory. A schema sharing its namespace with a
//!   schema that sorts before it is generated as an extension of that earlier
//!   vocabulary.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod manifest;
pub mod mapping;
pub mod schema;
pub mod vocabulary;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use semdesk_vocabulary::loader::ResourceFormat;
use semdesk_vocabulary::TermKind;
use walkdir::WalkDir;

use manifest::Manifest;
use schema::Schema;
use vocabulary::ModuleOptions;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of vocabulary modules generated.
    pub vocabulary_count: usize,
    /// Number of classes across all modules.
    pub class_count: usize,
    /// Number of properties across all modules.
    pub property_count: usize,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
}

/// Collects generated modules and writes them under one output directory.
struct Writer<'a> {
    out_dir: &'a Path,
    modules: Vec<String>,
    report: GenerationReport,
}

impl<'a> Writer<'a> {
    fn new(out_dir: &'a Path) -> Self {
        Self {
            out_dir,
            modules: Vec::new(),
            report: GenerationReport::default(),
        }
    }

    fn module(&mut self, schema: &Schema, options: &ModuleOptions) -> Result<()> {
        let content = vocabulary::generate_module(schema, options);
        let file_rel = format!("{}.rs", options.name);
        emit::write_file(&self.out_dir.join(&file_rel), &content)?;
        tracing::debug!(
            module = %options.name,
            source = %options.source,
            terms = schema.terms.len(),
            "generated module"
        );

        self.report.vocabulary_count += 1;
        self.report.class_count += schema.count(TermKind::Class);
        self.report.property_count += schema.count(TermKind::Property);
        self.report.files.push(file_rel);
        self.modules.push(options.name.clone());
        Ok(())
    }

    fn finish(mut self) -> Result<GenerationReport> {
        let mod_rs = vocabulary::generate_mod_rs(&self.modules);
        emit::write_file(&self.out_dir.join("mod.rs"), &mod_rs)?;
        self.report.files.push("mod.rs".to_string());
        tracing::info!(
            vocabularies = self.report.vocabulary_count,
            classes = self.report.class_count,
            properties = self.report.property_count,
            "vocabulary modules generated"
        );
        Ok(self.report)
    }
}

fn read_schema_file(path: &Path, namespace: Option<&str>) -> Result<Schema> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    schema::read_schema(BufReader::new(file), ResourceFormat::RdfXml, namespace)
        .with_context(|| format!("Failed to read schema {}", path.display()))
}

/// Generates the modules listed in the manifest at `manifest_path` into
/// `out_dir`, plus a `mod.rs` declaring them in manifest order.
///
/// # Errors
///
/// Returns an error if the manifest is invalid, a schema cannot be read, an
/// extension's namespace differs from its base's, or a file cannot be
/// written.
pub fn generate_from_manifest(manifest_path: &Path, out_dir: &Path) -> Result<GenerationReport> {
    let manifest = Manifest::read(manifest_path)?;
    let root = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let mut namespaces: HashMap<&str, String> = HashMap::new();
    let mut writer = Writer::new(out_dir);

    for entry in &manifest.vocabularies {
        let schema = read_schema_file(&root.join(&entry.schema), entry.namespace.as_deref())?;
        if let Some(base) = &entry.extends {
            let expected = namespaces.get(base.as_str()).map(String::as_str);
            if expected != Some(schema.namespace.as_str()) {
                bail!(
                    "Vocabulary `{}` declares <{}> but extends `{base}`",
                    entry.name,
                    schema.namespace
                );
            }
        }
        writer.module(&schema, &entry.module_options()?)?;
        namespaces.insert(entry.name.as_str(), schema.namespace);
    }

    writer.finish()
}

/// Generates one vocabulary module per `.rdfs` file under `input` into
/// `out_dir`, plus a `mod.rs` declaring them.
///
/// Files are processed in file-name order and every schema ships as its own
/// resource. `namespace` overrides namespace detection for every schema.
///
/// # Errors
///
/// Returns an error if the input cannot be walked, a schema cannot be
/// parsed, two schemas map to the same module name, no schema is found, or a
/// file cannot be written.
pub fn generate(
    input: &Path,
    out_dir: &Path,
    namespace: Option<&str>,
) -> Result<GenerationReport> {
    let mut writer = Writer::new(out_dir);
    // Namespace → module name of the first schema declaring it.
    let mut bases: HashMap<String, String> = HashMap::new();

    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", input.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_schema(path) {
            continue;
        }
        let (Some(file_name), Some(stem)) = (
            path.file_name().and_then(|n| n.to_str()),
            path.file_stem().and_then(|s| s.to_str()),
        ) else {
            tracing::warn!(path = %path.display(), "skipping schema with a non UTF-8 name");
            continue;
        };

        let name = mapping::module_name(stem);
        if writer.modules.contains(&name) {
            bail!("{} maps to module `{name}`, which is already generated", path.display());
        }

        let schema = read_schema_file(path, namespace)?;
        let base = bases.get(&schema.namespace).cloned();
        let options = ModuleOptions {
            prefix: base.clone().unwrap_or_else(|| name.clone()),
            base,
            ..ModuleOptions::standalone(&name, file_name)
        };
        if options.base.is_none() {
            bases.insert(schema.namespace.clone(), name);
        }
        writer.module(&schema, &options)?;
    }

    if writer.modules.is_empty() {
        bail!("No .rdfs schema found under {}", input.display());
    }
    writer.finish()
}

fn is_schema(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rdfs")
}
