//! Schema → Rust naming rules.
//!
//! Deterministic mappings from schema file names and IRIs to Rust module
//! names, namespaces, and local names.

/// Rust keywords that cannot be used as module names.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

/// Converts a schema file stem to a Rust module name.
///
/// E.g. `"wgs84-pos"` → `"wgs84_pos"`, `"type"` → `"type_"`, `"3d"` → `"_3d"`.
#[must_use]
pub fn module_name(stem: &str) -> String {
    let mut name: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

/// Returns the namespace part of an IRI: everything up to and including the
/// last `#`, or the last `/` if there is no `#`.
#[must_use]
pub fn namespace_of(iri: &str) -> &str {
    let end = iri
        .rfind('#')
        .or_else(|| iri.rfind('/'))
        .map_or(0, |i| i + 1);
    &iri[..end]
}

/// Returns the local name of `iri` within `namespace`, if it has one.
#[must_use]
pub fn local_name<'a>(iri: &'a str, namespace: &str) -> Option<&'a str> {
    iri.strip_prefix(namespace).filter(|local| !local.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_names() {
        assert_eq!(module_name("geo"), "geo");
        assert_eq!(module_name("source2"), "source2");
        assert_eq!(module_name("wgs84-Pos"), "wgs84_pos");
        assert_eq!(module_name("type"), "type_");
        assert_eq!(module_name("3d"), "_3d");
    }

    #[test]
    fn namespace_extraction() {
        assert_eq!(
            namespace_of("http://www.w3.org/2003/01/geo/wgs84_pos#lat"),
            "http://www.w3.org/2003/01/geo/wgs84_pos#"
        );
        assert_eq!(
            namespace_of("http://purl.org/dc/elements/1.1/title"),
            "http://purl.org/dc/elements/1.1/"
        );
        assert_eq!(namespace_of("urn-without-separator"), "");
    }

    #[test]
    fn local_name_extraction() {
        assert_eq!(
            local_name(
                "http://www.w3.org/2006/vcard/ns#family-name",
                "http://www.w3.org/2006/vcard/ns#"
            ),
            Some("family-name")
        );
        let dc = "http://purl.org/dc/elements/1.1/";
        assert_eq!(local_name(dc, dc), None);
        assert_eq!(local_name("http://example.org/x", "http://purl.org/dc/terms/"), None);
    }
}
