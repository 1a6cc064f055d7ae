//! Core data models for cppstyle
//!
//! These models are shared by the checks, the scorer and the reporters.

/// Severity levels for violations
///
/// Only errors count towards the deduction. Warnings are reported and
/// counted in the total but never change the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single naming or structural infraction found in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the check that produced it (the reporting category)
    pub check: String,
    pub message: String,
    /// Base name of the originating file
    pub file: String,
    pub severity: Severity,
}

impl Violation {
    pub fn error(check: &str, file: &str, message: impl Into<String>) -> Self {
        Self {
            check: check.to_string(),
            message: message.into(),
            file: file.to_string(),
            severity: Severity::Error,
        }
    }

    pub fn warning(check: &str, file: &str, message: impl Into<String>) -> Self {
        Self {
            check: check.to_string(),
            message: message.into(),
            file: file.to_string(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Append-only, insertion-ordered record of every violation in one run.
///
/// Detection order is preserved: file by file, check by check within a
/// file, match by match within a check.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, violation: Violation) {
        self.items.push(violation);
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|v| v.is_error()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Summary of violations by severity and by check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationsSummary {
    pub errors: usize,
    pub warnings: usize,
    pub total: usize,
    /// `(check name, count)` in the order each check first reported
    pub by_check: Vec<(String, usize)>,
}

impl ViolationsSummary {
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut summary = Self::default();
        for v in violations {
            match v.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
            summary.total += 1;

            match summary.by_check.iter_mut().find(|(name, _)| *name == v.check) {
                Some((_, count)) => *count += 1,
                None => summary.by_check.push((v.check.clone(), 1)),
            }
        }
        summary
    }
}
