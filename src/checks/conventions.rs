//! Naming conventions shared by the checks

use regex::Regex;
use std::sync::OnceLock;

/// Type keywords that introduce a function definition
pub(crate) const FUNCTION_TYPES: &str = r"void|int|bool|float|double|char|string|std::string|auto";

/// Type keywords that introduce a local variable declaration
pub(crate) const VARIABLE_TYPES: &str = r"int|bool|float|double|char|string|std::string|auto";

/// Type keywords that introduce a file-scope variable
pub(crate) const GLOBAL_TYPES: &str = r"int|bool|float|double|char|string|std::string";

static LOWER_SNAKE: OnceLock<Regex> = OnceLock::new();
static UPPER_CAMEL: OnceLock<Regex> = OnceLock::new();
static UPPER_SNAKE: OnceLock<Regex> = OnceLock::new();

fn lower_snake() -> &'static Regex {
    LOWER_SNAKE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid regex"))
}

fn upper_camel() -> &'static Regex {
    UPPER_CAMEL.get_or_init(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("valid regex"))
}

fn upper_snake() -> &'static Regex {
    UPPER_SNAKE.get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid regex"))
}

/// `parse_line`, `run2`: functions
pub fn is_lower_snake_case(name: &str) -> bool {
    lower_snake().is_match(name)
}

/// `SongList`: classes
pub fn is_upper_camel_case(name: &str) -> bool {
    upper_camel().is_match(name)
}

/// `MAX_SIZE`: macros
pub fn is_upper_snake_case(name: &str) -> bool {
    upper_snake().is_match(name)
}

/// At least one cased character and no lowercase ones (`MAX`, `K2`)
pub fn is_all_uppercase(name: &str) -> bool {
    name.chars().any(char::is_uppercase) && !name.chars().any(char::is_lowercase)
}

/// Include-guard macros are recognised by suffix alone
pub fn is_header_guard(name: &str) -> bool {
    name.ends_with("_H") || name.ends_with("_HPP")
}
