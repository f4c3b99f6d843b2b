//! Lists every bundled vocabulary and prints a Turtle preview of one.
//!
//! Run with: `cargo run --example dump_vocabularies -p semdesk-vocabulary`

use semdesk_vocabulary::serializer::{jsonld, turtle};
use semdesk_vocabulary::{Registry, TermKind};

fn main() {
    let registry = Registry::full();

    println!("semdesk vocabularies: {} distinct terms", registry.term_count());
    println!();

    for vocabulary in &registry.vocabularies {
        let table = vocabulary.table();
        println!(
            "  {:12} {:66} {:>2} classes, {:>2} properties  [{}{}]",
            vocabulary.name,
            vocabulary.namespace,
            table.of_kind(TermKind::Class).count(),
            table.of_kind(TermKind::Property).count(),
            vocabulary.source,
            vocabulary
                .base
                .map(|b| format!(", extends {}", b.name))
                .unwrap_or_default(),
        );
    }

    println!();

    let geo = semdesk_vocabulary::vocabularies::geo::VOCABULARY.table();
    let ttl = turtle::to_turtle(&semdesk_vocabulary::vocabularies::geo::VOCABULARY);
    println!("geo as Turtle ({} terms, {} bytes):", geo.len(), ttl.len());
    for line in ttl.lines().take(12) {
        println!("  {line}");
    }
    println!("  ...");

    let json = jsonld::to_json_ld(&semdesk_vocabulary::vocabularies::geo::VOCABULARY);
    let json_str =
        serde_json::to_string_pretty(&json).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("geo as JSON-LD ({} bytes)", json_str.len());
}
