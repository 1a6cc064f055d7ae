//! Macro Names Check
//!
//! `#define` names use uppercase with underscores. Names ending in `_H` or
//! `_HPP` are taken to be include guards and skipped, whatever their case.

use crate::checks::base::{Check, SourceFile};
use crate::checks::conventions::{is_header_guard, is_upper_snake_case};
use crate::config::LintConfig;
use crate::models::Violation;
use regex::Regex;
use std::sync::OnceLock;

static DEFINE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn define_pattern() -> &'static Regex {
    DEFINE_PATTERN
        .get_or_init(|| Regex::new(r"#define\s+([a-zA-Z_][a-zA-Z0-9_]*)").expect("valid regex"))
}

pub struct MacroNamesCheck;

impl MacroNamesCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacroNamesCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for MacroNamesCheck {
    fn name(&self) -> &'static str {
        "macro-names"
    }

    fn description(&self) -> &'static str {
        "Macros use uppercase with underscores"
    }

    fn check(&self, file: &SourceFile<'_>, _config: &LintConfig) -> Vec<Violation> {
        let mut violations = Vec::new();

        for caps in define_pattern().captures_iter(file.text) {
            let macro_name = &caps[1];
            if is_header_guard(macro_name) {
                continue;
            }
            if !is_upper_snake_case(macro_name) {
                violations.push(Violation::error(
                    self.name(),
                    file.name,
                    format!("macro '{macro_name}' should use uppercase with underscores"),
                ));
            }
        }

        violations
    }
}
