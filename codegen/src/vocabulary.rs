//! Vocabulary module generator.
//!
//! Renders a [`Schema`] as a Rust module declaring its terms as a static
//! `TermDef` slice and a `Vocabulary` descriptor.

use semdesk_vocabulary::TermKind;

use crate::emit::{string_literal, wrap, RustFile};
use crate::schema::Schema;

/// Identity of a generated vocabulary module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOptions {
    /// Module and registry name.
    pub name: String,
    /// Conventional prefix.
    pub prefix: String,
    /// Schema file the module is generated from.
    pub source: String,
    /// Resource name the loader resolves, if the schema ships with the crate.
    pub resource: Option<String>,
    /// Module name of the vocabulary this one extends.
    pub base: Option<String>,
}

impl ModuleOptions {
    /// Options for a standalone schema shipped as `source`.
    #[must_use]
    pub fn standalone(name: &str, source: &str) -> Self {
        Self {
            name: name.to_owned(),
            prefix: name.to_owned(),
            source: source.to_owned(),
            resource: Some(source.to_owned()),
            base: None,
        }
    }
}

/// Generates the Rust source of one vocabulary module.
#[must_use]
pub fn generate_module(schema: &Schema, options: &ModuleOptions) -> String {
    let name = &options.name;
    let label = schema.label.as_deref().unwrap_or(name);

    let mut header = format!("`{name}` vocabulary: {label}.\n\n");
    if let Some(comment) = &schema.comment {
        for line in wrap(comment) {
            header.push_str(&line);
            header.push('\n');
        }
        header.push('\n');
    }
    header.push_str(&format!(
        "Generated by `vocab-writer` from `{}`. Do not edit by hand.",
        options.source
    ));

    let mut f = RustFile::new(&header);
    f.line("use crate::model::{TermDef, Vocabulary, VocabularyTable};");
    f.blank();

    f.doc_comment("Namespace IRI.");
    f.line(&format!("pub const NS: &str = {};", string_literal(&schema.namespace)));
    f.blank();

    f.doc_comment("Term declarations, classes first.");
    f.line("#[rustfmt::skip]");
    f.line("pub static TERMS: &[TermDef] = &[");
    for term in &schema.terms {
        let ctor = match term.kind {
            TermKind::Class => "class",
            TermKind::Property => "property",
        };
        let comment = term
            .comment
            .as_deref()
            .map_or_else(|| "None".to_owned(), |c| format!("Some({})", string_literal(c)));
        f.line(&format!(
            "    TermDef::{ctor}({}, {}, {comment}),",
            string_literal(&term.name),
            string_literal(&term.label),
        ));
    }
    f.line("];");
    f.blank();

    f.doc_comment(&format!("The `{name}` vocabulary descriptor."));
    f.line("#[rustfmt::skip]");
    f.line("pub static VOCABULARY: Vocabulary = Vocabulary::new(");
    f.line(&format!("    {},", string_literal(name)));
    f.line(&format!("    {},", string_literal(&options.prefix)));
    f.line("    NS,");
    f.line(&format!("    {},", string_literal(label)));
    f.line(&format!("    {},", string_literal(&options.source)));
    f.line("    TERMS,");
    let mut chain = Vec::new();
    if let Some(resource) = &options.resource {
        chain.push(format!(".with_resource({})", string_literal(resource)));
    }
    if let Some(base) = &options.base {
        chain.push(format!(".extending(&super::{base}::VOCABULARY)"));
    }
    match chain.split_last() {
        Some((last, rest)) => {
            f.line(")");
            for call in rest {
                f.line(call);
            }
            f.line(&format!("{last};"));
        }
        None => f.line(");"),
    }
    f.blank();

    f.doc_comment(&format!("Returns the `{name}` table."));
    f.line("#[must_use]");
    f.line("pub fn table() -> &'static VocabularyTable {");
    f.line("    VOCABULARY.table()");
    f.line("}");
    f.blank();
    f.doc_comment("Looks up the full identifier of a term by local name.");
    f.line("#[must_use]");
    f.line("pub fn iri(name: &str) -> Option<&'static str> {");
    f.line("    VOCABULARY.iri(name)");
    f.line("}");
    f.finish()
}

/// Generates a `mod.rs` declaring `modules` in the given order.
#[must_use]
pub fn generate_mod_rs(modules: &[String]) -> String {
    let mut f = RustFile::new(
        "Vocabulary modules.\n\n\
         Modules are listed in generation order; an extension always follows its\n\
         base.\n\n\
         Generated by `vocab-writer`. Do not edit by hand.",
    );
    for module in modules {
        f.line(&format!("pub mod {module};"));
    }
    f.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{read_schema, SchemaTerm};
    use semdesk_vocabulary::loader::{EmbeddedResources, ResourceFormat};

    fn bundled(resource: &str) -> Schema {
        let content = EmbeddedResources.get(resource).unwrap();
        read_schema(content.as_bytes(), ResourceFormat::RdfXml, None).unwrap()
    }

    #[test]
    fn regenerates_bundled_geo_module() {
        let options = ModuleOptions::standalone("geo", "geo.rdfs");
        let generated = generate_module(&bundled("geo.rdfs"), &options);
        assert_eq!(generated, include_str!("../../vocabulary/src/vocabularies/geo.rs"));
    }

    #[test]
    fn regenerates_bundled_extension_module() {
        let options = ModuleOptions {
            name: "filesource".to_owned(),
            prefix: "source".to_owned(),
            source: "source2.rdfs".to_owned(),
            resource: Some("source2.rdfs".to_owned()),
            base: Some("source".to_owned()),
        };
        let generated = generate_module(&bundled("source2.rdfs"), &options);
        assert_eq!(generated, include_str!("../../vocabulary/src/vocabularies/filesource.rs"));
    }

    #[test]
    fn module_without_resource_or_header() {
        let schema = Schema {
            namespace: "http://example.org/ns#".to_owned(),
            label: None,
            comment: None,
            terms: vec![SchemaTerm {
                name: "Thing".to_owned(),
                label: "a \"thing\"".to_owned(),
                comment: None,
                kind: TermKind::Class,
            }],
        };
        let options = ModuleOptions {
            resource: None,
            ..ModuleOptions::standalone("ex", "ex.rdfs")
        };
        let generated = generate_module(&schema, &options);
        assert!(generated.starts_with("//! `ex` vocabulary: ex.\n//!\n//! Generated by"));
        assert!(generated.contains("    TermDef::class(\"Thing\", \"a \\\"thing\\\"\", None),\n"));
        assert!(generated.contains("    TERMS,\n);\n"));
        assert!(!generated.contains("with_resource"));
    }

    #[test]
    fn mod_rs_lists_modules_in_order() {
        let generated = generate_mod_rs(&["source".to_owned(), "source2".to_owned()]);
        assert!(generated.ends_with("\npub mod source;\npub mod source2;\n"));
    }
}
