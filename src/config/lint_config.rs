//! Lint configuration
//!
//! # Configuration Format
//!
//! ```toml
//! header_extensions = ["h", "hpp"]
//! source_extensions = ["cpp", "cc"]
//! scope_context_chars = 50
//! disabled_checks = ["global-variables"]
//!
//! [scoring]
//! first_error = 10
//! per_additional_error = 2
//! max_deduction = 20
//! ```
//!
//! Every field is optional; missing fields take the style-guide defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Deduction constants
///
/// ```text
/// 0 errors   -> 0
/// 1 error    -> first_error
/// N errors   -> min(max_deduction, first_error + (N - 1) * per_additional_error)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_first_error")]
    pub first_error: u32,

    #[serde(default = "default_per_additional_error")]
    pub per_additional_error: u32,

    #[serde(default = "default_max_deduction")]
    pub max_deduction: u32,
}

fn default_first_error() -> u32 {
    10
}

fn default_per_additional_error() -> u32 {
    2
}

fn default_max_deduction() -> u32 {
    20
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            first_error: default_first_error(),
            per_additional_error: default_per_additional_error(),
            max_deduction: default_max_deduction(),
        }
    }
}

/// Configuration consumed by the check engine and the scorer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LintConfig {
    /// Extensions (without the dot) that mark a header file
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,

    /// Extensions (without the dot) that mark a source file
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// How many characters before a free-function match are searched for `::`
    #[serde(default = "default_scope_context_chars")]
    pub scope_context_chars: usize,

    /// Checks to skip, by name (kebab-case or snake_case)
    #[serde(default)]
    pub disabled_checks: Vec<String>,

    #[serde(default)]
    pub scoring: ScoringConfig,
}

fn default_header_extensions() -> Vec<String> {
    vec!["h".to_string()]
}

fn default_source_extensions() -> Vec<String> {
    vec!["cpp".to_string()]
}

fn default_scope_context_chars() -> usize {
    50
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            header_extensions: default_header_extensions(),
            source_extensions: default_source_extensions(),
            scope_context_chars: default_scope_context_chars(),
            disabled_checks: Vec::new(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl LintConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LintConfig =
            toml::from_str(content).context("parsing lint configuration")?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading lint configuration {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("in {}", path.display()))?;
        debug!("Loaded lint config from {}", path.display());
        Ok(config)
    }

    pub fn is_header(&self, file_name: &str) -> bool {
        has_extension(file_name, &self.header_extensions)
    }

    pub fn is_source(&self, file_name: &str) -> bool {
        has_extension(file_name, &self.source_extensions)
    }

    /// Check if a check is enabled (defaults to true)
    pub fn is_check_enabled(&self, name: &str) -> bool {
        let normalized = normalize_check_name(name);
        !self
            .disabled_checks
            .iter()
            .any(|d| normalize_check_name(d) == normalized)
    }
}

/// Suffix match on the file name, so `foo.test.h` is a header
fn has_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| {
        file_name
            .strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// Normalize check name for config lookup
///
/// `FunctionNamesCheck`, `function_names` and `function-names` all become
/// `function-names`.
pub fn normalize_check_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c == '_' {
            result.push('-');
        } else if c.is_ascii_uppercase() {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    if let Some(stem) = result.strip_suffix("-check") {
        return stem.to_string();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_style_guide() {
        let config = LintConfig::default();
        assert_eq!(config.header_extensions, vec!["h"]);
        assert_eq!(config.source_extensions, vec!["cpp"]);
        assert_eq!(config.scope_context_chars, 50);
        assert_eq!(config.scoring.first_error, 10);
        assert_eq!(config.scoring.per_additional_error, 2);
        assert_eq!(config.scoring.max_deduction, 20);
        assert!(config.disabled_checks.is_empty());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = LintConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = LintConfig::from_toml_str(
            r#"
header_extensions = ["h", "hpp"]
disabled_checks = ["global_variables"]

[scoring]
max_deduction = 30
"#,
        )
        .expect("config parses");

        assert!(config.is_header("widget.hpp"));
        assert!(config.is_source("widget.cpp"));
        assert_eq!(config.scoring.max_deduction, 30);
        assert_eq!(config.scoring.first_error, 10);
        assert!(!config.is_check_enabled("global-variables"));
        assert!(config.is_check_enabled("macro-names"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = LintConfig::from_toml_str("header_extensions = 3").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("parsing lint configuration"), "unexpected error: {msg}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cppstyle.toml");
        std::fs::write(&path, "source_extensions = [\"cc\"]\n").expect("write config");

        let config = LintConfig::load(&path).expect("config loads");
        assert!(config.is_source("main.cc"));
        assert!(!config.is_source("main.cpp"));
    }

    #[test]
    fn test_file_classification() {
        let config = LintConfig::default();
        assert!(config.is_header("song.h"));
        assert!(!config.is_header("song.hpp"));
        assert!(!config.is_header("graph"));
        assert!(!config.is_header("h"));
        assert!(config.is_source("main.cpp"));
        assert!(!config.is_source("main.c"));
    }

    #[test]
    fn test_normalize_check_name() {
        assert_eq!(normalize_check_name("FunctionNamesCheck"), "function-names");
        assert_eq!(normalize_check_name("function_names"), "function-names");
        assert_eq!(normalize_check_name("function-names"), "function-names");
        assert_eq!(normalize_check_name("HeaderGuardCheck"), "header-guard");
        assert_eq!(normalize_check_name("Macro_Names"), "macro-names");
        assert_eq!(normalize_check_name("header-guard-check"), "header-guard");
    }
}
