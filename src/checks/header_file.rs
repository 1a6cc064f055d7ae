//! Header-file checks
//!
//! Only run on files with a header extension.

use crate::checks::base::{Check, SourceFile};
use crate::config::LintConfig;
use crate::models::Violation;

/// Headers open with an `#ifndef` include guard.
pub struct HeaderGuardCheck;

impl HeaderGuardCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeaderGuardCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for HeaderGuardCheck {
    fn name(&self) -> &'static str {
        "header-guard"
    }

    fn description(&self) -> &'static str {
        "Header files start with an #ifndef include guard"
    }

    fn applies_to(&self, file_name: &str, config: &LintConfig) -> bool {
        config.is_header(file_name)
    }

    fn check(&self, file: &SourceFile<'_>, _config: &LintConfig) -> Vec<Violation> {
        if file.text.trim_start().starts_with("#ifndef") {
            return Vec::new();
        }
        vec![Violation::error(
            self.name(),
            file.name,
            "header files must use #ifndef include guards",
        )]
    }
}

/// Layout rules for headers (include ordering, one declaration per header).
///
/// Registered so the slot exists; it reports nothing yet.
pub struct HeaderStructureCheck;

impl HeaderStructureCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeaderStructureCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for HeaderStructureCheck {
    fn name(&self) -> &'static str {
        "header-structure"
    }

    fn description(&self) -> &'static str {
        "Header file layout"
    }

    fn applies_to(&self, file_name: &str, config: &LintConfig) -> bool {
        config.is_header(file_name)
    }

    fn check(&self, _file: &SourceFile<'_>, _config: &LintConfig) -> Vec<Violation> {
        Vec::new()
    }
}
