//! Variable Names Check
//!
//! Local variables use lower camel case. Constants (all uppercase) and
//! member variables (trailing underscore) are exempt.

use crate::checks::base::{Check, SourceFile};
use crate::checks::conventions::{is_all_uppercase, VARIABLE_TYPES};
use crate::config::LintConfig;
use crate::models::Violation;
use regex::Regex;
use std::sync::OnceLock;

static DECLARATION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn declaration_pattern() -> &'static Regex {
    DECLARATION_PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"\b(?:{VARIABLE_TYPES})\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*[=;]"
        ))
        .expect("valid regex")
    })
}

pub struct VariableNamesCheck;

impl VariableNamesCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VariableNamesCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for VariableNamesCheck {
    fn name(&self) -> &'static str {
        "variable-names"
    }

    fn description(&self) -> &'static str {
        "Local variables use lower camel case"
    }

    fn check(&self, file: &SourceFile<'_>, _config: &LintConfig) -> Vec<Violation> {
        let mut violations = Vec::new();

        for caps in declaration_pattern().captures_iter(file.text) {
            let var_name = &caps[1];

            if is_all_uppercase(var_name) || var_name.ends_with('_') {
                continue;
            }

            if var_name.chars().next().is_some_and(char::is_uppercase) {
                violations.push(Violation::error(
                    self.name(),
                    file.name,
                    format!("variable name '{var_name}' should use lower camel case (lowercase first letter)"),
                ));
            }
        }

        violations
    }
}
