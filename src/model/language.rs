//! Language taxonomy and per-language conventions.
//!
//! This module defines a compact enum for languages the engine knows about
//! and small utilities for file-extension based detection. We intentionally
//! keep this module free of Tree-sitter grammars to avoid heavy compile-time
//! coupling. Language→grammar mapping lives in [`crate::languages`].

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Languages the engine can identify.
///
/// Keep the set tight and add variants deliberately. Identification does not
/// imply a parser binding exists: [`crate::languages::ParserRegistry`]
/// decides which variants are actually parseable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    Python,
    Dart,
    JavaScript,
    TypeScript,
    Rust,
}

impl Display for LanguageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LanguageKind::Python => "python",
            LanguageKind::Dart => "dart",
            LanguageKind::JavaScript => "javascript",
            LanguageKind::TypeScript => "typescript",
            LanguageKind::Rust => "rust",
        })
    }
}

impl LanguageKind {
    /// Best-effort detection by file extension.
    ///
    /// Returns `None` for unsupported extensions; callers may fall back to
    /// generic handling. The mapping is intentionally conservative.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let e = ext.to_ascii_lowercase();
        match e.as_str() {
            "py" => Some(Self::Python),
            "dart" => Some(Self::Dart),
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::JavaScript),
            "ts" | "tsx" => Some(Self::TypeScript),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Doc-comment convention for this language, if one is defined.
    ///
    /// The splicer never hard-codes delimiters; a language without a
    /// [`DocStyle`] cannot take spliced documentation.
    pub fn doc_style(self) -> Option<DocStyle> {
        match self {
            Self::Python => Some(DocStyle {
                block_open: ":",
                doc_open: "\"\"\"",
                doc_close: "\"\"\"",
            }),
            _ => None,
        }
    }
}

/// Per-language doc-comment convention consumed by the splicer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocStyle {
    /// Token that closes a definition header and opens its body (`:` in Python).
    pub block_open: &'static str,
    /// Opening delimiter of a doc literal (`"""` in Python).
    pub doc_open: &'static str,
    /// Closing delimiter of a doc literal.
    pub doc_close: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_detection() {
        assert_eq!(LanguageKind::from_extension("py"), Some(LanguageKind::Python));
        assert_eq!(LanguageKind::from_extension("PY"), Some(LanguageKind::Python));
        assert_eq!(LanguageKind::from_extension("tsx"), Some(LanguageKind::TypeScript));
        assert_eq!(LanguageKind::from_extension("yaml"), None);
    }

    #[test]
    fn python_doc_style() {
        let style = LanguageKind::Python.doc_style().unwrap();
        assert_eq!(style.block_open, ":");
        assert_eq!(style.doc_open, "\"\"\"");
        assert_eq!(style.doc_close, "\"\"\"");
    }

    #[test]
    fn only_python_has_doc_style() {
        assert!(LanguageKind::Rust.doc_style().is_none());
        assert!(LanguageKind::Dart.doc_style().is_none());
    }
}
