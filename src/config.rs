//! Engine configuration: filters, limits, environment overrides.
//!
//! All structs are `serde`-friendly so a config can be loaded from JSON if
//! an embedding application wants to. ENV overrides cover the two knobs that
//! matter operationally: ignore globs and the file-size cap.

use crate::errors::{Error, Result};
use globset::Glob;
use serde::{Deserialize, Serialize};
use std::env;

/// Comma-separated glob list replacing the default ignore globs.
pub const ENV_IGNORE_GLOBS: &str = "DOCSTRING_IGNORE_GLOBS";
/// Maximum file size in bytes; files above it are skipped during scanning.
pub const ENV_MAX_FILE_BYTES: &str = "DOCSTRING_MAX_FILE_BYTES";

/// Top-level configuration for both pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which files to include/exclude.
    pub filters: Filters,
    /// Size limits.
    pub limits: Limits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            limits: Limits::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from ENV variables, falling back to defaults.
    pub fn from_env_or_default() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(raw) = env::var(ENV_IGNORE_GLOBS) {
            cfg.filters.ignore_globs = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(raw) = env::var(ENV_MAX_FILE_BYTES) {
            cfg.limits.max_file_bytes = raw.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{ENV_MAX_FILE_BYTES} must be a positive integer, got `{raw}`"
                ))
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate config sanity (no degenerate or absurd values).
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_file_bytes == 0 {
            return Err(Error::Config("max_file_bytes must be greater than 0".into()));
        }
        for pat in &self.filters.ignore_globs {
            if pat.trim().is_empty() {
                continue;
            }
            Glob::new(pat)
                .map_err(|e| Error::Config(format!("bad ignore glob `{pat}`: {e}")))?;
        }
        Ok(())
    }
}

/// File filtering rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filters {
    /// Glob patterns for files to ignore.
    pub ignore_globs: Vec<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            ignore_globs: vec![
                "**/.git/**".into(),
                "**/node_modules/**".into(),
                "**/build/**".into(),
                "**/target/**".into(),
                "**/__pycache__/**".into(),
                "**/.venv/**".into(),
            ],
        }
    }
}

/// Limits for scanning and parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum file size to parse (bytes).
    pub max_file_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_bytes: 2 * 1024 * 1024, // 2 MB
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_file_size_is_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.limits.max_file_bytes = 0;
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn bad_glob_is_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.filters.ignore_globs = vec!["a{".into()];
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    // Both ENV knobs in one test: parallel test threads share the process
    // environment, so the overrides are set, asserted, and removed here only.
    #[test]
    fn env_overrides_are_applied_and_validated() {
        unsafe {
            env::set_var(ENV_IGNORE_GLOBS, "**/vendor/**, **/tmp/**,");
            env::set_var(ENV_MAX_FILE_BYTES, "1024");
        }
        let cfg = EngineConfig::from_env_or_default().unwrap();
        assert_eq!(
            cfg.filters.ignore_globs,
            vec!["**/vendor/**".to_string(), "**/tmp/**".to_string()]
        );
        assert_eq!(cfg.limits.max_file_bytes, 1024);

        unsafe {
            env::set_var(ENV_MAX_FILE_BYTES, "lots");
        }
        assert!(matches!(
            EngineConfig::from_env_or_default(),
            Err(Error::Config(_))
        ));

        unsafe {
            env::remove_var(ENV_IGNORE_GLOBS);
            env::remove_var(ENV_MAX_FILE_BYTES);
        }
    }

    #[test]
    fn roundtrips_through_json() {
        let cfg = EngineConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.limits.max_file_bytes, cfg.limits.max_file_bytes);
        assert_eq!(back.filters.ignore_globs, cfg.filters.ignore_globs);
    }
}
