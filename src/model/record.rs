//! Dataset record emitted by the corpus extractor.

use serde::{Deserialize, Serialize};

/// One mined (code, docstring) training pair.
///
/// Serialized exactly as `{filename, method_name, code, docstring}`, one JSON
/// object per line; there is no schema version tag. Records are created once
/// per kept method and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Repository-relative file identifier with stable `/` separators,
    /// rooted at the repository directory name.
    pub filename: String,
    pub method_name: String,
    /// Method source with the doc comment text removed.
    pub code: String,
    /// Doc comment text with all quote characters stripped.
    pub docstring: String,
}
