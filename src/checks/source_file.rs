//! Source-file checks
//!
//! Only run on files with a source extension.

use crate::checks::base::{Check, SourceFile};
use crate::config::LintConfig;
use crate::models::Violation;

/// Layout rules for implementation files (include-what-you-use, function
/// ordering).
///
/// Registered so the slot exists; it reports nothing yet.
pub struct SourceStructureCheck;

impl SourceStructureCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SourceStructureCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for SourceStructureCheck {
    fn name(&self) -> &'static str {
        "source-structure"
    }

    fn description(&self) -> &'static str {
        "Source file layout"
    }

    fn applies_to(&self, file_name: &str, config: &LintConfig) -> bool {
        config.is_source(file_name)
    }

    fn check(&self, _file: &SourceFile<'_>, _config: &LintConfig) -> Vec<Violation> {
        Vec::new()
    }
}
