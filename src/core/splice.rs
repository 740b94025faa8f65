//! Text-level docstring splicing.
//!
//! The splicer rewrites exactly one method occurrence inside a file, keeping
//! every byte outside the replaced span untouched. Delimiters come from the
//! language's [`DocStyle`]; nothing here is Python-specific.
//!
//! Callers must process one method per read/write round-trip against the
//! *current* file content, never against a batch computed from a single
//! stale snapshot: offsets shift after each successful splice, and duplicate
//! method bodies would otherwise all map to the same first match.

use crate::errors::{Error, Result};
use crate::model::language::DocStyle;

/// Embed `generated` as a doc comment into `method_source`.
///
/// The definition header is the shortest prefix ending at the language's
/// block-opening delimiter followed by a line break; the remainder is the
/// body. The indentation unit is the space/tab prefix of the body's first
/// line.
///
/// # Errors
/// [`Error::NotFound`] when the method source contains no block-opening
/// delimiter (single-line definitions cannot take an inserted doc line).
pub fn insert_docstring(style: &DocStyle, method_source: &str, generated: &str) -> Result<String> {
    let needle = format!("{}\n", style.block_open);
    let header_end = method_source.find(&needle).ok_or_else(|| {
        Error::NotFound(format!(
            "no `{}` block opener in method source",
            style.block_open
        ))
    })? + needle.len();

    let header = &method_source[..header_end];
    let body = &method_source[header_end..];
    let indent: String = body
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    Ok(format!(
        "{header}{indent}{open}\n{indent}{generated}\n{indent}{close}\n{body}",
        open = style.doc_open,
        close = style.doc_close,
    ))
}

/// Replace the first verbatim occurrence of `method_source` inside
/// `file_text` with the same method carrying `generated` as its docstring.
///
/// Bytes before and after the replaced occurrence are preserved unchanged.
///
/// # Errors
/// [`Error::NotFound`] when `method_source` is not a verbatim substring of
/// `file_text` (concurrent external edit, or a duplicate code block already
/// consumed by a prior splice), or when the method has no block opener.
pub fn splice_docstring(
    style: &DocStyle,
    file_text: &str,
    method_source: &str,
    generated: &str,
) -> Result<String> {
    let updated_method = insert_docstring(style, method_source, generated)?;
    let start = file_text
        .find(method_source)
        .ok_or_else(|| Error::NotFound("method source not present in file".into()))?;
    let end = start + method_source.len();

    let mut out = String::with_capacity(file_text.len() + updated_method.len());
    out.push_str(&file_text[..start]);
    out.push_str(&updated_method);
    out.push_str(&file_text[end..]);
    Ok(out)
}
