//! Parse results: one method node, one parsed file.

use crate::model::span::Span;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Immutable parse result for one function/method definition.
///
/// `source_text` is the verbatim byte span from the definition's syntactic
/// start to its syntactic end, never truncated or padded. `doc_comment` is
/// the literal text (delimiters included) of the first body statement when
/// that statement is a standalone string literal; a string literal appearing
/// later in the body does not count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNode {
    /// Declared name; unique only within the enclosing scope.
    pub name: String,
    /// Verbatim source of the whole definition.
    pub source_text: String,
    /// Existing doc comment, delimiters included.
    pub doc_comment: Option<String>,
    /// Byte/line range of the definition inside its file.
    pub span: Span,
}

impl MethodNode {
    /// True when the method already carries a doc comment.
    pub fn has_doc(&self) -> bool {
        self.doc_comment.is_some()
    }
}

/// One file's parse output, in traversal order: top-level definitions, then
/// one level of class-body nesting, depth-first. Owned transiently per parse
/// call; not retained across calls.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: PathBuf,
    /// Full source text as read from disk.
    pub source: String,
    pub methods: Vec<MethodNode>,
}
