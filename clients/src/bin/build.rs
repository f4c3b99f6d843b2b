//! `vocab-build`: writes every bundled vocabulary as RDF Schema documents.
//!
//! **Outputs**, per vocabulary:
//! - `<out>/<name>.ttl`: Turtle 1.1
//! - `<out>/<name>.nt`: N-Triples
//! - `<out>/<name>.jsonld`: JSON-LD 1.1
//!
//! **Usage:**
//! ```
//! vocab-build [--out <path>] [--vocabulary <name>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use semdesk_vocabulary::serializer::{jsonld, ntriples, turtle};
use semdesk_vocabulary::{Registry, TermKind, Vocabulary};

/// Build RDF Schema documents from the vocabulary tables.
#[derive(Parser)]
#[command(name = "vocab-build", about = "Write vocabularies as Turtle, N-Triples and JSON-LD")]
struct Args {
    /// Output directory for generated documents.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Only build the vocabulary with this registry name.
    #[arg(long)]
    vocabulary: Option<String>,
}

fn main() -> Result<()> {
    semdesk_clients::init_tracing();
    let args = Args::parse();
    let out = &args.out;

    let registry = Registry::full();
    let selected: Vec<&'static Vocabulary> = match &args.vocabulary {
        Some(name) => vec![registry
            .find(name)
            .with_context(|| format!("Unknown vocabulary: {name}"))?],
        None => registry.vocabularies.clone(),
    };

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    println!(
        "semdesk vocabularies: {} vocabularies, {} distinct terms",
        registry.vocabularies.len(),
        registry.term_count()
    );

    for vocabulary in selected {
        vocabulary
            .validate()
            .with_context(|| format!("Vocabulary {} is inconsistent", vocabulary.name))?;
        let table = vocabulary.table();
        println!(
            "{} <{}>: {} classes, {} properties",
            vocabulary.name,
            vocabulary.namespace,
            table.of_kind(TermKind::Class).count(),
            table.of_kind(TermKind::Property).count()
        );
        build(vocabulary, out)?;
    }

    println!("Build complete.");
    Ok(())
}

fn build(vocabulary: &'static Vocabulary, out: &Path) -> Result<()> {
    let ttl_path = out.join(format!("{}.ttl", vocabulary.name));
    write(&ttl_path, &turtle::to_turtle(vocabulary))?;

    let nt_path = out.join(format!("{}.nt", vocabulary.name));
    write(&nt_path, &ntriples::to_ntriples(vocabulary))?;

    let json_path = out.join(format!("{}.jsonld", vocabulary.name));
    let json_str = serde_json::to_string_pretty(&jsonld::to_json_ld(vocabulary))
        .with_context(|| format!("Failed to serialize {} to JSON-LD", vocabulary.name))?;
    write(&json_path, &json_str)?;
    Ok(())
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  Written: {}", path.display());
    Ok(())
}
