//! Documentation walker: parse → generate → splice across a tree.
//!
//! Strictly sequential by design: one file at a time, one method at a time.
//! Splice correctness depends on re-reading the mutated file before each
//! subsequent splice, so every accepted generation gets its own
//! read → splice → write round-trip against current file content.
//!
//! Failure semantics are best-effort batch, not transactional: per-file and
//! per-method failures are logged, recorded in the returned report, and do
//! not abort the remaining work. Only pre-flight failures (config, unknown
//! language) fail the whole call.

use crate::config::EngineConfig;
use crate::core::report::{FileReport, MethodOutcome, RunReport, Stage};
use crate::core::{fs_scan, parse, splice};
use crate::errors::{Error, Result};
use crate::languages::{MethodParser, ParserRegistry};
use crate::model::language::{DocStyle, LanguageKind};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// Inference boundary, consumed but never implemented here.
pub trait DocstringGenerator {
    /// Produce plain docstring body text for one method's source.
    ///
    /// Any deadline or retry policy belongs to the implementation; the
    /// walker attempts each method exactly once and skips it on failure.
    fn generate_docstring(&self, code: &str, language: LanguageKind) -> Result<String>;
}

/// Document every undocumented method in every `language` file under `root`.
///
/// Pre-flight (config validation, parser and doc-style lookup) happens
/// before any file I/O; only pre-flight can fail the call. A run in which
/// every file is individually skipped still returns `Ok(report)`.
#[tracing::instrument(level = "info", skip_all, fields(root = %root.display(), %language))]
pub fn document_tree(
    root: &Path,
    language: LanguageKind,
    generator: &dyn DocstringGenerator,
    config: &EngineConfig,
) -> Result<RunReport> {
    config.validate()?;
    let style = doc_style_for(language)?;
    let mut parser = ParserRegistry::builtin().create(language)?;

    let files = fs_scan::scan_language_files(root, language, config)?;
    info!("docgen: {} files to document", files.len());

    let mut report = RunReport::new(root, language);
    for path in &files {
        report.push(process_file(
            parser.as_mut(),
            &style,
            path,
            language,
            generator,
        ));
    }

    info!(
        documented = report.methods_documented(),
        already_documented = report.methods_already_documented(),
        skipped = report.methods_skipped(),
        "docgen: run finished"
    );
    Ok(report)
}

/// Document a single file; the walker's file mode.
#[tracing::instrument(level = "info", skip_all, fields(path = %path.display(), %language))]
pub fn document_file(
    path: &Path,
    language: LanguageKind,
    generator: &dyn DocstringGenerator,
) -> Result<FileReport> {
    let style = doc_style_for(language)?;
    let mut parser = ParserRegistry::builtin().create(language)?;
    Ok(process_file(
        parser.as_mut(),
        &style,
        path,
        language,
        generator,
    ))
}

fn doc_style_for(language: LanguageKind) -> Result<DocStyle> {
    language
        .doc_style()
        .ok_or(Error::UnsupportedLanguage(language))
}

/// Parse one file, generate docstrings for its undocumented methods, then
/// apply each generation with its own read/splice/write round-trip.
fn process_file(
    parser: &mut dyn MethodParser,
    style: &DocStyle,
    path: &Path,
    language: LanguageKind,
    generator: &dyn DocstringGenerator,
) -> FileReport {
    let parsed = match parse::parse_source_file(parser, path) {
        Ok(parsed) => parsed,
        Err(err) => {
            let stage = match &err {
                Error::Read { .. } => Stage::Read,
                _ => Stage::Parse,
            };
            error!("docgen: {} -> {}, skipping file", path.display(), err);
            return FileReport::skipped(path, stage, err.to_string());
        }
    };

    let mut report = FileReport::processed(path);
    let mut pending: Vec<(String, String, String)> = Vec::new();

    for method in &parsed.methods {
        if method.has_doc() {
            warn!(
                "docgen: {} -> {} already has a docstring, skipping",
                path.display(),
                method.name
            );
            report.push_method(&method.name, MethodOutcome::AlreadyDocumented);
            continue;
        }

        info!(
            "docgen: {} -> {} generating docstring",
            path.display(),
            method.name
        );
        match generator.generate_docstring(&method.source_text, language) {
            Ok(docstring) => {
                pending.push((method.name.clone(), method.source_text.clone(), docstring));
            }
            Err(err) => {
                error!(
                    "docgen: {} -> {} -> {}, skipping method",
                    path.display(),
                    method.name,
                    err
                );
                report.push_method(
                    &method.name,
                    MethodOutcome::Skipped {
                        stage: Stage::Inference,
                        reason: err.to_string(),
                    },
                );
            }
        }
    }

    for (name, source_text, docstring) in pending {
        match apply_one(style, path, &source_text, &docstring) {
            Ok(()) => {
                info!("docgen: {} -> {} docstring written", path.display(), name);
                report.push_method(&name, MethodOutcome::Documented);
            }
            Err((stage, err)) => {
                error!(
                    "docgen: {} -> {} -> {}, skipping method",
                    path.display(),
                    name,
                    err
                );
                report.push_method(
                    &name,
                    MethodOutcome::Skipped {
                        stage,
                        reason: err.to_string(),
                    },
                );
            }
        }
    }

    report
}

/// One read → splice → write round-trip against current file content.
fn apply_one(
    style: &DocStyle,
    path: &Path,
    method_source: &str,
    docstring: &str,
) -> std::result::Result<(), (Stage, Error)> {
    let current = fs::read_to_string(path).map_err(|e| {
        (
            Stage::Read,
            Error::Read {
                path: path.to_path_buf(),
                source: e,
            },
        )
    })?;

    let updated = splice::splice_docstring(style, &current, method_source, docstring)
        .map_err(|e| (Stage::Splice, e))?;

    fs::write(path, updated).map_err(|e| {
        (
            Stage::Write,
            Error::Write {
                path: path.to_path_buf(),
                source: e,
            },
        )
    })?;
    Ok(())
}
