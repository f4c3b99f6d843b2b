//! Rust source emission helpers.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::{Context, Result};

/// Width of wrapped doc comment text, excluding the `//! ` marker.
const DOC_WIDTH: usize = 76;

/// Builder for one generated Rust source file.
#[derive(Debug, Default)]
pub struct RustFile {
    /// Accumulated source text.
    pub buf: String,
}

impl RustFile {
    /// Starts a file with a module doc comment. Each line of `doc` becomes
    /// one `//!` line; empty lines become a bare `//!`.
    #[must_use]
    pub fn new(doc: &str) -> Self {
        let mut f = Self::default();
        for line in doc.lines() {
            if line.is_empty() {
                f.line("//!");
            } else {
                let _ = writeln!(f.buf, "//! {line}");
            }
        }
        f.blank();
        f
    }

    /// Appends one line.
    pub fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a `///` doc comment line.
    pub fn doc_comment(&mut self, s: &str) {
        if s.is_empty() {
            self.line("///");
        } else {
            let _ = writeln!(self.buf, "/// {s}");
        }
    }

    /// Returns the finished source.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Collapses runs of whitespace, including newlines, into single spaces.
#[must_use]
pub fn normalize_comment(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedily wraps `text` into lines of at most [`DOC_WIDTH`] characters.
/// A single word longer than the width gets a line of its own.
#[must_use]
pub fn wrap(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if !cur.is_empty() && cur.len() + 1 + word.len() > DOC_WIDTH {
            lines.push(std::mem::take(&mut cur));
        }
        if !cur.is_empty() {
            cur.push(' ');
        }
        cur.push_str(word);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Renders `s` as a Rust string literal.
#[must_use]
pub fn string_literal(s: &str) -> String {
    format!("{s:?}")
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_doc_lines() {
        let f = RustFile::new("First.\n\nSecond.");
        assert_eq!(f.finish(), "//! First.\n//!\n//! Second.\n\n");
    }

    #[test]
    fn wrap_breaks_at_width() {
        let text = "word ".repeat(40);
        let lines = wrap(&text);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= DOC_WIDTH));
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn literal_escapes_quotes() {
        assert_eq!(string_literal("a \"b\""), "\"a \\\"b\\\"\"");
    }

    #[test]
    fn normalizes_whitespace() {
        assert_eq!(normalize_comment("  a\n   b\tc "), "a b c");
    }

    #[test]
    fn write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/mod.rs");
        write_file(&path, "pub mod x;\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "pub mod x;\n");
    }
}
