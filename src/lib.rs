//! Grammar-aware docstring mining and injection.
//!
//! Two pipelines share one parsing core:
//! - [`docgen`] walks a tree, asks an external [`docgen::DocstringGenerator`]
//!   for text, and splices it into undocumented methods while preserving
//!   every byte outside the inserted comment.
//! - [`extract`] mines (code, docstring) training pairs from already-cloned
//!   repositories into JSONL.
//!
//! The crate is a library: no CLI, no HTTP layer, no inference machinery,
//! and no tracing subscriber setup — it only emits `tracing` events.

pub mod config;
pub mod core;
pub mod docgen;
pub mod errors;
pub mod export;
pub mod extract;
pub mod languages;
pub mod model;

pub use config::EngineConfig;
pub use docgen::{DocstringGenerator, document_file, document_tree};
pub use errors::{Error, Result};
pub use extract::{ExtractSummary, mine_repositories, mine_repository};
pub use languages::{MethodParser, ParserRegistry};
pub use model::language::{DocStyle, LanguageKind};
pub use model::method::{MethodNode, ParsedFile};
pub use model::record::DatasetRecord;
pub use model::span::Span;
