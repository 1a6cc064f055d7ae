//! Configuration module for cppstyle
//!
//! This module handles:
//! - File classification (header vs. source extensions)
//! - Scoring constants
//! - Enabling/disabling individual checks
//!
//! The binary always runs with [`LintConfig::default`], which encodes the
//! style guide exactly. Library callers may build variants.

mod lint_config;

pub use lint_config::{normalize_check_name, LintConfig, ScoringConfig};
