//! Data model shared by the parsing, splicing, and extraction layers.

pub mod language;
pub mod method;
pub mod record;
pub mod span;
