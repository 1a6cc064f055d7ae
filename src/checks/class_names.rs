//! Class Names Check

use crate::checks::base::{Check, SourceFile};
use crate::checks::conventions::is_upper_camel_case;
use crate::config::LintConfig;
use crate::models::Violation;
use regex::Regex;
use std::sync::OnceLock;

static CLASS_PATTERN: OnceLock<Regex> = OnceLock::new();

fn class_pattern() -> &'static Regex {
    CLASS_PATTERN
        .get_or_init(|| Regex::new(r"\bclass\s+([a-zA-Z_][a-zA-Z0-9_]*)").expect("valid regex"))
}

/// Every `class Name` uses upper camel case without underscores.
pub struct ClassNamesCheck;

impl ClassNamesCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassNamesCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ClassNamesCheck {
    fn name(&self) -> &'static str {
        "class-names"
    }

    fn description(&self) -> &'static str {
        "Classes use upper camel case"
    }

    fn check(&self, file: &SourceFile<'_>, _config: &LintConfig) -> Vec<Violation> {
        class_pattern()
            .captures_iter(file.text)
            .map(|caps| caps[1].to_string())
            .filter(|class_name| !is_upper_camel_case(class_name))
            .map(|class_name| {
                Violation::error(
                    self.name(),
                    file.name,
                    format!("class name '{class_name}' should use upper camel case (no underscores)"),
                )
            })
            .collect()
    }
}
