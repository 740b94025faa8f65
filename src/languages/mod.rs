//! Parser contract and the language → parser registry.
//!
//! The registry is a closed dispatch table built once at startup via
//! [`ParserRegistry::builtin`] and treated as read-only thereafter. There is
//! deliberately no global mutable table: callers own their registry instance,
//! so concurrent registration can never race.

pub mod python;

use crate::errors::{Error, Result};
use crate::model::{language::LanguageKind, method::MethodNode};
use std::collections::HashMap;

/// Capability interface every language binding implements.
pub trait MethodParser {
    /// Parse raw file bytes into method nodes, in traversal order.
    ///
    /// Fails only on fatal grammar failures; malformed-but-recoverable input
    /// yields a partial or empty result rather than failing the whole call.
    fn parse(&mut self, bytes: &[u8]) -> Result<Vec<MethodNode>>;
}

/// Factory producing a fresh parser instance for one language.
pub type ParserFactory = fn() -> Result<Box<dyn MethodParser>>;

/// Maps a [`LanguageKind`] to its parser factory.
pub struct ParserRegistry {
    table: HashMap<LanguageKind, ParserFactory>,
}

impl ParserRegistry {
    /// Empty registry; prefer [`ParserRegistry::builtin`] outside of tests.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Registry with all built-in bindings registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(LanguageKind::Python, || {
            let parser = python::PythonParser::new()?;
            Ok(Box::new(parser) as Box<dyn MethodParser>)
        });
        registry
    }

    /// Register a factory for `language`, replacing any previous one.
    pub fn register(&mut self, language: LanguageKind, factory: ParserFactory) {
        self.table.insert(language, factory);
    }

    /// Instantiate a parser for `language`.
    ///
    /// Fails with [`Error::UnsupportedLanguage`] when no factory is
    /// registered, before any file I/O can happen.
    pub fn create(&self, language: LanguageKind) -> Result<Box<dyn MethodParser>> {
        match self.table.get(&language) {
            Some(factory) => factory(),
            None => Err(Error::UnsupportedLanguage(language)),
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
