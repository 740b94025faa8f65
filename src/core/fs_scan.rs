//! Filesystem scanning for one target language.

use crate::config::EngineConfig;
use crate::core::normalize::{build_globset, detect_language, is_ignored_by};
use crate::errors::{Error, Result};
use crate::model::language::LanguageKind;
use globset::GlobSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Enumerate files under `root` carrying one of `language`'s extensions.
///
/// Ignore globs and the max-file-size limit from `cfg` are applied; the
/// result is de-duplicated and deterministically ordered so repeated runs
/// visit files in the same order.
pub fn scan_language_files(
    root: &Path,
    language: LanguageKind,
    cfg: &EngineConfig,
) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::Read {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "scan root does not exist"),
        });
    }

    info!("fs_scan: start -> {} ({})", root.display(), language);

    let ignore_globs: Option<GlobSet> = build_globset(&cfg.filters.ignore_globs);

    let mut skipped_ignored = 0usize;
    let mut skipped_too_big = 0usize;

    let mut files = Vec::<PathBuf>::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(keep_entry);

    for entry in walker.filter_map(std::result::Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        if detect_language(path) != Some(language) {
            continue;
        }

        if is_ignored_by(path, ignore_globs.as_ref()) {
            skipped_ignored += 1;
            debug!("fs_scan: ignore (glob) {}", path.display());
            continue;
        }

        let meta = match fs::metadata(path) {
            Ok(m) => m,
            Err(err) => {
                warn!("fs_scan: metadata failed for {}: {}", path.display(), err);
                continue;
            }
        };
        if meta.len() as usize > cfg.limits.max_file_bytes {
            skipped_too_big += 1;
            debug!(
                "fs_scan: skip (size {} > max {}) {}",
                meta.len(),
                cfg.limits.max_file_bytes,
                path.display()
            );
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    files.dedup();

    info!(
        "fs_scan: done, total={} (ignored={}, too_big={})",
        files.len(),
        skipped_ignored,
        skipped_too_big
    );

    Ok(files)
}

/// Coarse directory filter to avoid descending into heavy/vendor folders early.
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        if let Some(name) = entry.file_name().to_str() {
            return !matches!(
                name,
                ".git"
                    | "node_modules"
                    | "build"
                    | "target"
                    | "__pycache__"
                    | ".venv"
                    | ".idea"
                    | ".vscode"
            );
        }
    }
    true
}
