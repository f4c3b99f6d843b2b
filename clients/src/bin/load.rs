//! `vocab-load`: loads a vocabulary's schema documents into an RDF graph.
//!
//! Resources come from the documents bundled with `semdesk-vocabulary`, or
//! from a directory when `--resources` is given. Prints the number of
//! triples loaded; exits non-zero on any load failure.
//!
//! **Usage:**
//! ```
//! vocab-load <name> [--resources <dir>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use semdesk_vocabulary::loader::{load_ontology, DirectoryResources, EmbeddedResources};
use semdesk_vocabulary::Registry;
use sophia::api::prelude::*;
use sophia::inmem::graph::FastGraph;

/// Load a vocabulary's schema into an in-memory graph.
#[derive(Parser)]
#[command(name = "vocab-load", about = "Load a vocabulary schema and report its triple count")]
struct Args {
    /// Registry name of the vocabulary (e.g. `geo`, `filesource`).
    name: String,

    /// Directory to read schema documents from instead of the bundled ones.
    #[arg(long)]
    resources: Option<PathBuf>,
}

fn main() -> Result<()> {
    semdesk_clients::init_tracing();
    let args = Args::parse();

    let vocabulary = Registry::full()
        .find(&args.name)
        .with_context(|| format!("Unknown vocabulary: {}", args.name))?;

    let mut graph = FastGraph::new();
    let inserted = match &args.resources {
        Some(dir) => load_ontology(vocabulary, &DirectoryResources::new(dir), &mut graph),
        None => load_ontology(vocabulary, &EmbeddedResources, &mut graph),
    }
    .with_context(|| format!("Failed to load {}", vocabulary.name))?;

    println!(
        "{} ({}): {} triples from {}",
        vocabulary.name,
        vocabulary.label,
        inserted,
        vocabulary.resources().join(", ")
    );
    println!("Graph size: {}", graph.triples().count());
    Ok(())
}
