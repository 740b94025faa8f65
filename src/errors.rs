//! Unified error taxonomy for the docstring engine.
//!
//! Only `UnsupportedLanguage` and `Config` are fatal; they surface before any
//! file I/O happens. Everything else is recoverable at file/method
//! granularity: the pipelines log, record the skip in their report, and move
//! on to the next unit of work.

use crate::model::language::LanguageKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(LanguageKind),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("inference error: {0}")]
    Inference(String),

    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
