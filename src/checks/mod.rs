//! Style checks
//!
//! This module provides the check framework and the checks that make up
//! the style guide.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CheckEngine                           │
//! │  - Registers checks (skipping disabled ones)                │
//! │  - Reads each file through a FileSource                     │
//! │  - Runs checks in order, appends to the Violations record   │
//! │  - Notifies a RunObserver as violations are found           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Check Trait                          │
//! │  - name(): kebab-case identifier and report category        │
//! │  - applies_to(file): header / source filtering              │
//! │  - check(file, config): pure scan of the text               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every check is a regular-expression heuristic over raw text. There is
//! no parsing: macros that expand to declarations, multi-line
//! declarations and nested templates are known blind spots.
//!
//! # Checks (in run order)
//!
//! - `function-names` - functions and members in lowercase with underscores
//! - `variable-names` - locals in lower camel case
//! - `class-names` - classes in upper camel case
//! - `macro-names` - macros in uppercase with underscores
//! - `global-variables` - non-static file-scope variables (warning)
//! - `header-guard` - headers start with `#ifndef`
//! - `header-structure` - header layout (reports nothing yet)
//! - `source-structure` - source layout (reports nothing yet)

mod base;
mod class_names;
mod conventions;
mod engine;
mod file_source;
mod function_names;
mod global_variables;
mod header_file;
mod macro_names;
mod source_file;
mod variable_names;

pub use base::{Check, CheckSummary, SourceFile};
pub use class_names::ClassNamesCheck;
pub use conventions::{
    is_all_uppercase, is_header_guard, is_lower_snake_case, is_upper_camel_case,
    is_upper_snake_case,
};
pub use engine::{CheckEngine, RunObserver};
pub use file_source::{display_name, DiskFiles, FileSource, SourceError};
#[cfg(test)]
pub(crate) use file_source::MockFileSource;
pub use function_names::FunctionNamesCheck;
pub use global_variables::GlobalVariablesCheck;
pub use header_file::{HeaderGuardCheck, HeaderStructureCheck};
pub use macro_names::MacroNamesCheck;
pub use source_file::SourceStructureCheck;
pub use variable_names::VariableNamesCheck;

use std::sync::Arc;

/// All checks of the style guide, in run order
pub fn default_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(FunctionNamesCheck::new()),
        Arc::new(VariableNamesCheck::new()),
        Arc::new(ClassNamesCheck::new()),
        Arc::new(MacroNamesCheck::new()),
        Arc::new(GlobalVariablesCheck::new()),
        // Header files only
        Arc::new(HeaderGuardCheck::new()),
        Arc::new(HeaderStructureCheck::new()),
        // Source files only
        Arc::new(SourceStructureCheck::new()),
    ]
}
