//! Base check trait and types
//!
//! This module defines the core abstractions for style checking:
//! - `Check` trait that all checks implement
//! - `SourceFile` for handing file text to a check
//! - `CheckSummary` for per-run bookkeeping

use crate::config::LintConfig;
use crate::models::Violation;
use std::collections::HashMap;

/// The text of one file as seen by the checks
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'a> {
    /// Base name of the file, used for reporting and extension matching
    pub name: &'a str,
    /// Full file content
    pub text: &'a str,
}

impl<'a> SourceFile<'a> {
    pub fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }
}

/// Trait for all style checks
///
/// A check is a pure function of the file text and name. It never fails:
/// text that does not look like code simply produces no violations.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyCheck;
///
/// impl Check for MyCheck {
///     fn name(&self) -> &'static str {
///         "my-check"
///     }
///
///     fn description(&self) -> &'static str {
///         "Detects my specific naming problem"
///     }
///
///     fn check(&self, file: &SourceFile<'_>, config: &LintConfig) -> Vec<Violation> {
///         vec![]
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Unique kebab-case identifier, also the reporting category
    fn name(&self) -> &'static str;

    /// Human-readable description of what this check enforces
    fn description(&self) -> &'static str;

    /// Whether this check runs on the given file
    ///
    /// Default: every file
    fn applies_to(&self, _file_name: &str, _config: &LintConfig) -> bool {
        true
    }

    /// Scan the file and return violations in match order
    fn check(&self, file: &SourceFile<'_>, config: &LintConfig) -> Vec<Violation>;
}

/// Summary statistics from one engine run
#[derive(Debug, Clone, Default)]
pub struct CheckSummary {
    /// Files that were read and scanned
    pub files_checked: usize,
    /// Paths skipped because they were missing or unreadable
    pub files_skipped: usize,
    /// Violations per check name
    pub by_check: HashMap<String, usize>,
}

impl CheckSummary {
    pub fn add(&mut self, check: &str, count: usize) {
        if count > 0 {
            *self.by_check.entry(check.to_string()).or_insert(0) += count;
        }
    }
}
