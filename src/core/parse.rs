//! Read-and-parse orchestration shared by both pipelines.

use crate::errors::{Error, Result};
use crate::languages::MethodParser;
use crate::model::method::ParsedFile;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read `path` as UTF-8 text and parse it into method nodes.
///
/// # Errors
/// [`Error::Read`] when the file cannot be read as UTF-8 text;
/// [`Error::Parse`] on fatal grammar failures.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn parse_source_file(parser: &mut dyn MethodParser, path: &Path) -> Result<ParsedFile> {
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let methods = parser.parse(source.as_bytes())?;
    debug!("parse: {} -> {} methods", path.display(), methods.len());
    Ok(ParsedFile {
        path: path.to_path_buf(),
        source,
        methods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::ParserRegistry;
    use crate::model::language::LanguageKind;

    #[test]
    fn reads_and_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.py");
        std::fs::write(&path, "def f():\n    pass\n").unwrap();

        let mut parser = ParserRegistry::builtin()
            .create(LanguageKind::Python)
            .unwrap();
        let parsed = parse_source_file(parser.as_mut(), &path).unwrap();
        assert_eq!(parsed.methods.len(), 1);
        assert_eq!(parsed.source, "def f():\n    pass\n");
    }

    #[test]
    fn missing_file_is_read_error() {
        let mut parser = ParserRegistry::builtin()
            .create(LanguageKind::Python)
            .unwrap();
        let err = parse_source_file(parser.as_mut(), Path::new("/no/such/file.py")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
