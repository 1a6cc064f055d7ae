//! Global Variables Check
//!
//! Flags file-scope variables that are not `static`. Scope is approximated
//! line by line: a running brace depth, and a counter that goes up on every
//! line mentioning `class ` and never comes back down. A declaration counts
//! as global only while both are zero.
//!
//! Braces inside strings or comments and multi-line class heads throw the
//! depth off. This is accepted.

use crate::checks::base::{Check, SourceFile};
use crate::checks::conventions::GLOBAL_TYPES;
use crate::config::LintConfig;
use crate::models::Violation;
use regex::Regex;
use std::sync::OnceLock;

static GLOBAL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn global_pattern() -> &'static Regex {
    GLOBAL_PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"^\s*(?:{GLOBAL_TYPES})\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*[=;]"
        ))
        .expect("valid regex")
    })
}

pub struct GlobalVariablesCheck;

impl GlobalVariablesCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GlobalVariablesCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for GlobalVariablesCheck {
    fn name(&self) -> &'static str {
        "global-variables"
    }

    fn description(&self) -> &'static str {
        "Avoids non-static file-scope variables"
    }

    fn check(&self, file: &SourceFile<'_>, _config: &LintConfig) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut brace_depth: i64 = 0;
        let mut class_count: usize = 0;

        for line in file.text.lines() {
            let trimmed = line.trim();

            brace_depth += line.matches('{').count() as i64;
            brace_depth -= line.matches('}').count() as i64;
            if line.contains("class ") {
                class_count += 1;
            }

            if brace_depth != 0 || class_count != 0 {
                continue;
            }

            if trimmed.starts_with("static") {
                continue;
            }

            if let Some(caps) = global_pattern().captures(trimmed) {
                let var_name = &caps[1];
                violations.push(Violation::warning(
                    self.name(),
                    file.name,
                    format!("global variable '{var_name}' should be static or avoided"),
                ));
            }
        }

        violations
    }
}
