//! `vocab-writer`: generates vocabulary table modules from RDF Schema files.
//!
//! By default follows `vocabulary/vocabularies.toml` and regenerates the
//! bundled modules in `vocabulary/src/vocabularies/`. With `--input`, walks a
//! directory for `.rdfs` documents instead and writes one module per schema.
//! Either way a `mod.rs` is written alongside.
//!
//! **Usage:**
//! ```
//! vocab-writer [--manifest <file>] [--out <path>]
//! vocab-writer --input <dir> [--out <path>] [--namespace <iri>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Generate vocabulary modules from RDF Schema files.
#[derive(Parser)]
#[command(name = "vocab-writer", about = "Generate vocabulary table modules from .rdfs files")]
struct Args {
    /// Vocabulary manifest listing the schemas to generate, in registry order.
    #[arg(long, default_value = "vocabulary/vocabularies.toml")]
    manifest: PathBuf,

    /// Directory (or single file) of `.rdfs` schemas to generate from instead
    /// of the manifest.
    #[arg(long, conflicts_with = "manifest")]
    input: Option<PathBuf>,

    /// Output directory for generated modules.
    #[arg(long, default_value = "vocabulary/src/vocabularies")]
    out: PathBuf,

    /// Namespace IRI of the schema terms; detected per schema when omitted.
    #[arg(long, requires = "input")]
    namespace: Option<String>,
}

fn main() -> Result<()> {
    semdesk_clients::init_tracing();
    let args = Args::parse();

    let report = match &args.input {
        Some(input) => {
            println!(
                "Generating vocabulary modules from {} into {}",
                input.display(),
                args.out.display()
            );
            semdesk_codegen::generate(input, &args.out, args.namespace.as_deref())?
        }
        None => {
            println!(
                "Generating vocabulary modules from manifest {} into {}",
                args.manifest.display(),
                args.out.display()
            );
            semdesk_codegen::generate_from_manifest(&args.manifest, &args.out)?
        }
    };

    println!(
        "Generated {} vocabularies: {} classes, {} properties",
        report.vocabulary_count, report.class_count, report.property_count
    );
    println!("Files written ({}):", report.files.len());
    for file in &report.files {
        println!("  {file}");
    }

    println!("Generation complete.");
    Ok(())
}
