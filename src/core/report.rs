//! Explicit per-unit outcomes for the documentation walker.
//!
//! Catch-log-continue error handling is surfaced here as data, not as
//! logging side effects alone: every file resolves to processed-or-skipped,
//! every method to documented, already-documented, or skipped with a stage
//! and reason. A run in which every file is skipped is still a successful
//! run at the process level.

use crate::model::language::LanguageKind;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Pipeline stage at which a unit of work was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Read,
    Parse,
    Inference,
    Splice,
    Write,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stage::Read => "read",
            Stage::Parse => "parse",
            Stage::Inference => "inference",
            Stage::Splice => "splice",
            Stage::Write => "write",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MethodOutcome {
    /// A docstring was generated, spliced, and persisted.
    Documented,
    /// The method already carried a doc comment; nothing was touched.
    AlreadyDocumented,
    /// Abandoned at `stage`; the rest of the batch continued.
    Skipped { stage: Stage, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodReport {
    pub name: String,
    pub outcome: MethodOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum FileOutcome {
    /// The file was parsed; per-method outcomes are listed individually.
    Processed,
    /// The whole file was abandoned at `stage` before any method work.
    Skipped { stage: Stage, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path as given to the walker, with stable `/` separators.
    pub path: String,
    pub outcome: FileOutcome,
    pub methods: Vec<MethodReport>,
}

impl FileReport {
    pub fn processed(path: &Path) -> Self {
        Self {
            path: path.display().to_string().replace('\\', "/"),
            outcome: FileOutcome::Processed,
            methods: Vec::new(),
        }
    }

    pub fn skipped(path: &Path, stage: Stage, reason: impl Into<String>) -> Self {
        Self {
            path: path.display().to_string().replace('\\', "/"),
            outcome: FileOutcome::Skipped {
                stage,
                reason: reason.into(),
            },
            methods: Vec::new(),
        }
    }

    pub fn push_method(&mut self, name: impl Into<String>, outcome: MethodOutcome) {
        self.methods.push(MethodReport {
            name: name.into(),
            outcome,
        });
    }

    pub fn documented(&self) -> usize {
        self.count(|o| matches!(o, MethodOutcome::Documented))
    }

    pub fn already_documented(&self) -> usize {
        self.count(|o| matches!(o, MethodOutcome::AlreadyDocumented))
    }

    pub fn skipped_methods(&self) -> usize {
        self.count(|o| matches!(o, MethodOutcome::Skipped { .. }))
    }

    fn count(&self, pred: impl Fn(&MethodOutcome) -> bool) -> usize {
        self.methods.iter().filter(|m| pred(&m.outcome)).count()
    }
}

/// Aggregated outcome of one walker run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub root: String,
    pub language: LanguageKind,
    /// RFC 3339 UTC stamp taken when the run started.
    pub generated_at: String,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(root: &Path, language: LanguageKind) -> Self {
        Self {
            root: root.display().to_string().replace('\\', "/"),
            language,
            generated_at: Utc::now().to_rfc3339(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    pub fn files_processed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Processed))
            .count()
    }

    pub fn files_skipped(&self) -> usize {
        self.files.len() - self.files_processed()
    }

    pub fn methods_documented(&self) -> usize {
        self.files.iter().map(FileReport::documented).sum()
    }

    pub fn methods_already_documented(&self) -> usize {
        self.files.iter().map(FileReport::already_documented).sum()
    }

    pub fn methods_skipped(&self) -> usize {
        self.files.iter().map(FileReport::skipped_methods).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_aggregate_across_files() {
        let mut run = RunReport::new(Path::new("repo"), LanguageKind::Python);

        let mut a = FileReport::processed(Path::new("repo/a.py"));
        a.push_method("f", MethodOutcome::Documented);
        a.push_method("g", MethodOutcome::AlreadyDocumented);
        run.push(a);

        let mut b = FileReport::processed(Path::new("repo/b.py"));
        b.push_method(
            "h",
            MethodOutcome::Skipped {
                stage: Stage::Inference,
                reason: "model unavailable".into(),
            },
        );
        run.push(b);

        run.push(FileReport::skipped(
            Path::new("repo/c.py"),
            Stage::Parse,
            "no tree",
        ));

        assert_eq!(run.files_processed(), 2);
        assert_eq!(run.files_skipped(), 1);
        assert_eq!(run.methods_documented(), 1);
        assert_eq!(run.methods_already_documented(), 1);
        assert_eq!(run.methods_skipped(), 1);
    }

    #[test]
    fn report_serializes_with_tagged_outcomes() {
        let mut file = FileReport::processed(Path::new("a.py"));
        file.push_method(
            "f",
            MethodOutcome::Skipped {
                stage: Stage::Splice,
                reason: "not found".into(),
            },
        );
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("\"status\":\"skipped\""));
        assert!(json.contains("\"stage\":\"splice\""));
    }
}
