//! Python method parser backed by tree-sitter-python.
//!
//! Collection rules:
//! - Top-level `function_definition` nodes are collected directly.
//! - For each top-level `class_definition`, its body is scanned for nested
//!   `function_definition` nodes — exactly one nesting level, nothing deeper.
//! - Decorated definitions surface as `decorated_definition` wrappers and are
//!   therefore not collected.
//!
//! Doc-comment detection runs one anchored query per method: the first
//! statement of the definition's body must be a standalone string literal.
//! A match is accepted only when the captured definition is the method node
//! itself, so a nested definition's docstring is never attributed to its
//! parent.

use crate::errors::{Error, Result};
use crate::languages::MethodParser;
use crate::model::{method::MethodNode, span::Span};
use tracing::debug;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, StreamingIterator};

/// First body statement is a standalone string literal.
const DOC_QUERY: &str = r#"
(function_definition
  body: (block . (expression_statement (string) @doc))) @def
"#;

pub struct PythonParser {
    parser: Parser,
    doc_query: Query,
    doc_idx: u32,
    def_idx: u32,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Parse(format!("python grammar setup failed: {e}")))?;
        let doc_query = Query::new(&language, DOC_QUERY)
            .map_err(|e| Error::Parse(format!("python doc query failed to compile: {e}")))?;
        let doc_idx = doc_query
            .capture_index_for_name("doc")
            .ok_or_else(|| Error::Parse("python doc query: missing @doc capture".into()))?;
        let def_idx = doc_query
            .capture_index_for_name("def")
            .ok_or_else(|| Error::Parse("python doc query: missing @def capture".into()))?;
        Ok(Self {
            parser,
            doc_query,
            doc_idx,
            def_idx,
        })
    }

    /// Top-level functions plus methods one level down inside class bodies,
    /// depth-first in document order.
    fn collect_methods<'tree>(&self, root: Node<'tree>) -> Vec<Node<'tree>> {
        let mut methods = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "function_definition" {
                methods.push(child);
            }
            if child.kind() == "class_definition" {
                if let Some(body) = child.child_by_field_name("body") {
                    let mut body_cursor = body.walk();
                    for member in body.children(&mut body_cursor) {
                        if member.kind() == "function_definition" {
                            methods.push(member);
                        }
                    }
                }
            }
        }
        methods
    }

    /// Declared name via the grammar's `name` field, falling back to the
    /// first `identifier` child.
    fn method_name(&self, method: Node, bytes: &[u8]) -> Option<String> {
        let node = method.child_by_field_name("name").or_else(|| {
            let mut cursor = method.walk();
            let found = method
                .children(&mut cursor)
                .find(|n| n.kind() == "identifier");
            found
        })?;
        node.utf8_text(bytes).ok().map(str::to_string)
    }

    /// Doc literal text (quotes included) when the method's first body
    /// statement is a standalone string literal.
    fn doc_comment(&self, method: Node, bytes: &[u8]) -> Option<String> {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.doc_query, method, bytes);
        while let Some(m) = matches.next() {
            let mut is_this_method = false;
            let mut doc: Option<&str> = None;
            for cap in m.captures {
                if cap.index == self.def_idx && cap.node.id() == method.id() {
                    is_this_method = true;
                }
                if cap.index == self.doc_idx {
                    doc = cap.node.utf8_text(bytes).ok();
                }
            }
            if is_this_method {
                if let Some(text) = doc {
                    return Some(text.to_string());
                }
            }
        }
        None
    }
}

impl MethodParser for PythonParser {
    fn parse(&mut self, bytes: &[u8]) -> Result<Vec<MethodNode>> {
        let tree = self
            .parser
            .parse(bytes, None)
            .ok_or_else(|| Error::Parse("tree-sitter returned no tree".into()))?;

        let mut result = Vec::new();
        for method in self.collect_methods(tree.root_node()) {
            let Some(name) = self.method_name(method, bytes) else {
                debug!("python: unnamed definition at byte {}, skipping", method.start_byte());
                continue;
            };
            let source_text = method
                .utf8_text(bytes)
                .map_err(|e| Error::Parse(format!("invalid utf-8 in method `{name}`: {e}")))?
                .to_string();
            let doc_comment = self.doc_comment(method, bytes);
            let span = Span::new(
                method.start_position().row + 1,
                method.end_position().row + 1,
                method.start_byte(),
                method.end_byte(),
            );
            result.push(MethodNode {
                name,
                source_text,
                doc_comment,
                span,
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Vec<MethodNode> {
        let mut parser = PythonParser::new().unwrap();
        parser.parse(src.as_bytes()).unwrap()
    }

    #[test]
    fn top_level_function() {
        let nodes = parse("def f():\n    pass\n");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "f");
        assert_eq!(nodes[0].source_text, "def f():\n    pass");
        assert_eq!(nodes[0].doc_comment, None);
    }

    #[test]
    fn docstring_captured_with_delimiters() {
        let nodes = parse("def f():\n    \"\"\"Docs here.\"\"\"\n    pass\n");
        assert_eq!(nodes[0].doc_comment.as_deref(), Some("\"\"\"Docs here.\"\"\""));
    }

    #[test]
    fn later_string_literal_is_not_a_docstring() {
        let nodes = parse("def f():\n    x = 1\n    \"not a docstring\"\n");
        assert_eq!(nodes[0].doc_comment, None);
    }

    #[test]
    fn class_methods_one_level_deep() {
        let src = "\
class A:
    def m1(self):
        \"\"\"m1 docs\"\"\"
        pass

    def m2(self):
        pass

def top():
    pass
";
        let nodes = parse(src);
        let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["m1", "m2", "top"]);
        assert_eq!(nodes[0].doc_comment.as_deref(), Some("\"\"\"m1 docs\"\"\""));
        assert_eq!(nodes[1].doc_comment, None);
    }

    #[test]
    fn nested_docstring_not_attributed_to_parent() {
        let src = "\
def outer():
    def inner():
        \"\"\"inner docs\"\"\"
        pass
    return inner
";
        let nodes = parse(src);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "outer");
        assert_eq!(nodes[0].doc_comment, None);
    }

    #[test]
    fn decorated_definitions_are_not_collected() {
        let src = "\
@decorator
def wrapped():
    pass

def plain():
    pass
";
        let nodes = parse(src);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "plain");
    }

    #[test]
    fn empty_input_yields_no_methods() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn class_without_methods_contributes_nothing() {
        assert!(parse("class A:\n    x = 1\n").is_empty());
    }

    #[test]
    fn malformed_input_is_partial_not_fatal() {
        // Broken trailing statement must not abort the sibling definitions.
        let nodes = parse("def ok():\n    pass\n\ndef (\n");
        assert!(nodes.iter().any(|n| n.name == "ok"));
    }

    #[test]
    fn span_covers_definition() {
        let src = "x = 1\n\ndef f():\n    pass\n";
        let nodes = parse(src);
        assert_eq!(nodes[0].span.start_line, 3);
        assert_eq!(nodes[0].span.end_line, 4);
        assert_eq!(&src[nodes[0].span.start_byte..nodes[0].span.end_byte], nodes[0].source_text);
    }
}
