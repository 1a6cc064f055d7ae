//! Function Names Check
//!
//! All functions, including class members, use lowercase with underscores.
//! Three shapes are recognised:
//! - out-of-line constructors `Song::Song(...)` (no return type): the method
//!   must be named after the class
//! - out-of-line members `void Song::play(...)`: lowercase with underscores,
//!   constructors and destructors excepted
//! - free functions `int parse_line(...)`: lowercase with underscores, unless
//!   a `::` appears shortly before the match
//!
//! Multi-line signatures with nested parentheses and macro-generated
//! definitions are not recognised.

use crate::checks::base::{Check, SourceFile};
use crate::checks::conventions::{is_lower_snake_case, FUNCTION_TYPES};
use crate::config::LintConfig;
use crate::models::Violation;
use regex::Regex;
use std::sync::OnceLock;

static CONSTRUCTOR_PATTERN: OnceLock<Regex> = OnceLock::new();
static MEMBER_PATTERN: OnceLock<Regex> = OnceLock::new();
static FREE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn constructor_pattern() -> &'static Regex {
    CONSTRUCTOR_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?m)^([A-Z][a-zA-Z0-9]*)::([a-zA-Z_][a-zA-Z0-9_]*)\s*\([^)]*\)\s*(?:const)?\s*[{;]",
        )
        .expect("valid regex")
    })
}

fn member_pattern() -> &'static Regex {
    MEMBER_PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"\b(?:{FUNCTION_TYPES})\s+([A-Z][a-zA-Z0-9]*)::\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\([^)]*\)\s*(?:const)?\s*[{{;]"
        ))
        .expect("valid regex")
    })
}

fn free_pattern() -> &'static Regex {
    FREE_PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"\b(?:{FUNCTION_TYPES})\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\([^)]*\)\s*(?:const)?\s*[{{;]"
        ))
        .expect("valid regex")
    })
}

/// Text of at most `chars` characters ending at byte offset `end`
fn context_before(text: &str, end: usize, chars: usize) -> &str {
    let head = &text[..end];
    let start = if chars == 0 {
        end
    } else {
        head.char_indices()
            .rev()
            .nth(chars - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    &head[start..]
}

pub struct FunctionNamesCheck;

impl FunctionNamesCheck {
    pub fn new() -> Self {
        Self
    }

    fn check_constructors(&self, file: &SourceFile<'_>, out: &mut Vec<Violation>) {
        for caps in constructor_pattern().captures_iter(file.text) {
            let class_name = &caps[1];
            let func_name = &caps[2];
            if func_name != class_name {
                out.push(Violation::error(
                    self.name(),
                    file.name,
                    format!(
                        "constructor name '{func_name}' should match class name '{class_name}'"
                    ),
                ));
            }
        }
    }

    fn check_members(&self, file: &SourceFile<'_>, out: &mut Vec<Violation>) {
        for caps in member_pattern().captures_iter(file.text) {
            let class_name = &caps[1];
            let func_name = &caps[2];

            if func_name == class_name || func_name == format!("~{class_name}") {
                continue;
            }

            if !is_lower_snake_case(func_name) {
                out.push(Violation::error(
                    self.name(),
                    file.name,
                    format!("member function '{func_name}' should use lowercase with underscores"),
                ));
            }
        }
    }

    fn check_free_functions(
        &self,
        file: &SourceFile<'_>,
        config: &LintConfig,
        out: &mut Vec<Violation>,
    ) {
        for caps in free_pattern().captures_iter(file.text) {
            let Some(whole) = caps.get(0) else { continue };

            // Members were handled above
            if context_before(file.text, whole.start(), config.scope_context_chars).contains("::") {
                continue;
            }

            let func_name = &caps[1];
            if !is_lower_snake_case(func_name) {
                out.push(Violation::error(
                    self.name(),
                    file.name,
                    format!("function name '{func_name}' should use lowercase with underscores"),
                ));
            }
        }
    }
}

impl Default for FunctionNamesCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for FunctionNamesCheck {
    fn name(&self) -> &'static str {
        "function-names"
    }

    fn description(&self) -> &'static str {
        "Functions and member functions use lowercase with underscores"
    }

    fn check(&self, file: &SourceFile<'_>, config: &LintConfig) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.check_constructors(file, &mut violations);
        self.check_members(file, &mut violations);
        self.check_free_functions(file, config, &mut violations);
        violations
    }
}
