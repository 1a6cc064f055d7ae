//! cppstyle - C++ naming-convention linter
//!
//! Scans C++ sources with regular-expression heuristics, records violations
//! of a fixed style guide, and turns the error count into a deduction used
//! as the process exit status.
//!
//! ```ignore
//! use cppstyle::checks::{CheckEngine, SourceFile};
//! use cppstyle::config::LintConfig;
//! use cppstyle::scoring::deduction;
//!
//! let engine = CheckEngine::with_default_checks(LintConfig::default());
//! let violations = engine.check_file(&SourceFile::new("main.cpp", "void MyFunction() {}"));
//! let errors = violations.iter().filter(|v| v.is_error()).count();
//! assert_eq!(deduction(errors, &engine.config().scoring), 10);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod reporters;
pub mod scoring;
