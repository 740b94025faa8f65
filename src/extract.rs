//! Corpus extractor: mine (code, docstring) pairs from local repositories.
//!
//! Reuses the parser layer but never mutates sources. Methods are kept when
//! a doc comment is present and both cleaned sides are non-empty; everything
//! else is logged and dropped. All records for one repository land in a
//! single `docstrings_<repo>.jsonl`, written once per run.

use crate::config::EngineConfig;
use crate::core::normalize::normalize_repo_rel_str;
use crate::core::{fs_scan, parse};
use crate::errors::{Error, Result};
use crate::export::jsonl::JsonlWriter;
use crate::languages::ParserRegistry;
use crate::model::{language::LanguageKind, record::DatasetRecord};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Counters and output location for one mined repository.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractSummary {
    /// Repository name: the root directory's final component.
    pub repo: String,
    pub out_path: PathBuf,
    pub files_scanned: usize,
    pub files_parsed: usize,
    pub methods_seen: usize,
    pub records_written: usize,
    /// RFC 3339 UTC stamp taken when mining finished.
    pub generated_at: String,
}

/// Mine one already-cloned repository into `out_dir/docstrings_<repo>.jsonl`.
///
/// Per-file read and parse failures are logged and skipped; only pre-flight
/// failures (config, unknown language, missing root) and output-write
/// failures fail the call.
#[tracing::instrument(level = "info", skip_all, fields(repo = %repo_root.display(), %language))]
pub fn mine_repository(
    repo_root: &Path,
    out_dir: &Path,
    language: LanguageKind,
    config: &EngineConfig,
) -> Result<ExtractSummary> {
    config.validate()?;
    let mut parser = ParserRegistry::builtin().create(language)?;

    let files = fs_scan::scan_language_files(repo_root, language, config)?;
    let repo = repo_name(repo_root);
    info!("extract: {} repo has {} files", repo, files.len());

    let mut records = Vec::<DatasetRecord>::new();
    let mut files_parsed = 0usize;
    let mut methods_seen = 0usize;

    for path in &files {
        let parsed = match parse::parse_source_file(parser.as_mut(), path) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("extract: {} -> {}, skipping file", path.display(), err);
                continue;
            }
        };
        files_parsed += 1;

        let filename = normalize_repo_rel_str(repo_root, path);
        for method in &parsed.methods {
            methods_seen += 1;
            let Some(doc) = &method.doc_comment else {
                continue;
            };

            let (code, docstring) = clean_pair(&method.source_text, doc);
            if docstring.is_empty() {
                warn!(
                    "extract: {} -> {} has no valid doc comment",
                    filename, method.name
                );
                continue;
            }
            if code.is_empty() {
                warn!("extract: {} -> {} has no source code", filename, method.name);
                continue;
            }

            records.push(DatasetRecord {
                filename: filename.clone(),
                method_name: method.name.clone(),
                code,
                docstring,
            });
        }
    }

    fs::create_dir_all(out_dir).map_err(|e| Error::Write {
        path: out_dir.to_path_buf(),
        source: e,
    })?;
    let out_path = out_dir.join(format!("docstrings_{repo}.jsonl"));
    let mut writer = JsonlWriter::open(&out_path)?;
    for record in &records {
        writer.write_obj(record)?;
    }
    writer.finish()?;
    info!(
        "extract: wrote {} records -> {}",
        records.len(),
        out_path.display()
    );

    Ok(ExtractSummary {
        repo,
        out_path,
        files_scanned: files.len(),
        files_parsed,
        methods_seen,
        records_written: records.len(),
        generated_at: Utc::now().to_rfc3339(),
    })
}

/// Mine several local repository roots with per-repository error isolation:
/// one failing repository is logged and does not abort the others.
pub fn mine_repositories(
    repo_roots: &[PathBuf],
    out_dir: &Path,
    language: LanguageKind,
    config: &EngineConfig,
) -> Vec<ExtractSummary> {
    let mut summaries = Vec::new();
    for root in repo_roots {
        match mine_repository(root, out_dir, language, config) {
            Ok(summary) => summaries.push(summary),
            Err(err) => error!(
                "extract: {} -> {}, continuing with next repository",
                root.display(),
                err
            ),
        }
    }
    summaries
}

/// Remove the doc comment from the source (first textual match only) and
/// strip all quote characters from the retained docstring.
fn clean_pair(source: &str, doc: &str) -> (String, String) {
    let code = source.replacen(doc, "", 1);
    let docstring: String = doc.chars().filter(|c| *c != '"' && *c != '\'').collect();
    (code, docstring)
}

fn repo_name(root: &Path) -> String {
    root.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "unnamed_repo".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_pair_strips_doc_and_quotes() {
        let source = "def f():\n    \"\"\"Returns 'one'.\"\"\"\n    return 1";
        let doc = "\"\"\"Returns 'one'.\"\"\"";
        let (code, docstring) = clean_pair(source, doc);
        assert_eq!(code, "def f():\n    \n    return 1");
        assert_eq!(docstring, "Returns one.");
        assert!(!docstring.contains('"') && !docstring.contains('\''));
    }

    #[test]
    fn clean_pair_removes_first_match_only() {
        let source = "def f():\n    \"\"\"x\"\"\"\n    s = \"\"\"x\"\"\"";
        let (code, _) = clean_pair(source, "\"\"\"x\"\"\"");
        assert_eq!(code, "def f():\n    \n    s = \"\"\"x\"\"\"");
    }

    #[test]
    fn mines_documented_methods_only() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("sample_repo");
        std::fs::create_dir_all(&repo).unwrap();
        std::fs::write(
            repo.join("lib.py"),
            "def documented():\n    \"\"\"Has docs.\"\"\"\n    return 1\n\ndef bare():\n    return 2\n",
        )
        .unwrap();
        let out_dir = dir.path().join("out");

        let summary = mine_repository(
            &repo,
            &out_dir,
            LanguageKind::Python,
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(summary.repo, "sample_repo");
        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.methods_seen, 2);
        assert_eq!(summary.records_written, 1);

        let text = std::fs::read_to_string(&summary.out_path).unwrap();
        let record: DatasetRecord = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(record.method_name, "documented");
        assert_eq!(record.filename, "sample_repo/lib.py");
        assert!(!record.code.contains("Has docs."));
        assert!(!record.docstring.contains('"'));
        assert_eq!(record.docstring, "Has docs.");
    }

    #[test]
    fn quote_only_docstring_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("r");
        std::fs::create_dir_all(&repo).unwrap();
        std::fs::write(repo.join("a.py"), "def f():\n    \"\"\"\"\"\"\n    return 1\n").unwrap();

        let summary = mine_repository(
            &repo,
            &dir.path().join("out"),
            LanguageKind::Python,
            &EngineConfig::default(),
        )
        .unwrap();
        assert_eq!(summary.records_written, 0);
    }

    #[test]
    fn output_file_is_named_after_repo() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("numpy");
        std::fs::create_dir_all(&repo).unwrap();
        std::fs::write(repo.join("a.py"), "x = 1\n").unwrap();

        let summary = mine_repository(
            &repo,
            &dir.path().join("out"),
            LanguageKind::Python,
            &EngineConfig::default(),
        )
        .unwrap();
        assert!(summary.out_path.ends_with("docstrings_numpy.jsonl"));
        assert!(summary.out_path.exists());
    }

    #[test]
    fn bad_repository_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good");
        std::fs::create_dir_all(&good).unwrap();
        std::fs::write(good.join("a.py"), "def f():\n    \"\"\"d\"\"\"\n    return 1\n").unwrap();
        let missing = dir.path().join("missing");

        let summaries = mine_repositories(
            &[missing, good],
            &dir.path().join("out"),
            LanguageKind::Python,
            &EngineConfig::default(),
        );
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].repo, "good");
    }
}
