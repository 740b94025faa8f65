//! Normalization helpers for paths, language detection, and glob handling.
//!
//! These utilities keep persisted identifiers stable and comparable across
//! platforms: dataset records and reports must not depend on the machine the
//! engine happened to run on.

use crate::model::language::LanguageKind;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Convert a path into a repository-relative string with stable `/`
/// separators, rooted at the repository directory name.
///
/// Absolute paths depend on the machine and environment, so they are
/// unsuitable for persisted artifacts. The root's final component is kept so
/// records from different repositories stay distinguishable.
///
/// Steps performed:
/// 1. Canonicalize the `root` path (best-effort, resolves symlinks);
/// 2. Make the input `p` absolute (join with `root` if relative);
/// 3. Strip the prefix up to the *parent* of `root`;
/// 4. Replace all separators with `/`.
pub fn normalize_repo_rel_str(root: &Path, p: &Path) -> String {
    let root_abs = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let abs = dunce::canonicalize(p).unwrap_or_else(|_| {
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            root_abs.join(p)
        }
    });

    let repo_parent = root_abs.parent().unwrap_or(&root_abs);
    let rel = abs.strip_prefix(repo_parent).unwrap_or(&abs);

    to_unix_sep(rel.to_string_lossy())
}

/// Replace OS-specific separators with `/`.
///
/// # Example
/// ```
/// use docstring_engine::core::normalize::to_unix_sep;
///
/// let win_path = r"lib\src\foo.py";
/// assert_eq!(to_unix_sep(win_path), "lib/src/foo.py");
/// ```
pub fn to_unix_sep<S: AsRef<str>>(s: S) -> String {
    s.as_ref().replace('\\', "/")
}

/// Detect programming language from file extension (cheap heuristic).
///
/// Returns [`None`] if the extension does not map to a known language.
pub fn detect_language(path: &Path) -> Option<LanguageKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    LanguageKind::from_extension(&ext)
}

/// Build a [`GlobSet`] from patterns, skipping invalid or empty ones.
///
/// Returns `None` if the input list is empty or all patterns are invalid.
///
/// # Example
/// ```
/// use docstring_engine::core::normalize::build_globset;
///
/// let gs = build_globset(&vec!["**/__pycache__/**".to_string()]).unwrap();
/// assert!(gs.is_match("src/__pycache__/foo.pyc"));
/// ```
pub fn build_globset(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        if pat.trim().is_empty() {
            continue;
        }
        if let Ok(g) = Glob::new(pat) {
            builder.add(g);
        }
    }
    builder.build().ok()
}

/// Return `true` if a path matches the ignore glob set.
pub fn is_ignored_by(path: &Path, set: Option<&GlobSet>) -> bool {
    set.map_or(false, |gs| {
        gs.is_match(to_unix_sep(path.to_string_lossy()))
    })
}
