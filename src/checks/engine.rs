//! Check engine
//!
//! Runs every registered check over every input file, in order, and feeds
//! the results into the run's [`Violations`] accumulator.

use crate::checks::base::{Check, CheckSummary, SourceFile};
use crate::checks::file_source::{display_name, FileSource, SourceError};
use crate::config::LintConfig;
use crate::models::{Violation, Violations};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Live view of a run, notified as files are scanned
///
/// Every violation passed to `violation` has already been recorded in the
/// accumulator.
pub trait RunObserver {
    /// A file was read and is about to be checked
    fn file_started(&mut self, file_name: &str) -> Result<()>;

    /// A violation was detected
    fn violation(&mut self, violation: &Violation) -> Result<()>;

    /// A path could not be read and was skipped
    fn file_skipped(&mut self, error: &SourceError) -> Result<()>;
}

/// Orchestrates style checking across all registered checks
pub struct CheckEngine {
    checks: Vec<Arc<dyn Check>>,
    config: LintConfig,
}

impl CheckEngine {
    /// Create an engine with no checks registered
    pub fn new(config: LintConfig) -> Self {
        Self {
            checks: Vec::new(),
            config,
        }
    }

    /// Create an engine with the full style-guide check set
    pub fn with_default_checks(config: LintConfig) -> Self {
        let mut engine = Self::new(config);
        engine.register_all(crate::checks::default_checks());
        engine
    }

    /// Register a check. Checks run in registration order.
    pub fn register(&mut self, check: Arc<dyn Check>) {
        if !self.config.is_check_enabled(check.name()) {
            debug!("Skipping disabled check: {}", check.name());
            return;
        }
        debug!("Registering check: {}", check.name());
        self.checks.push(check);
    }

    /// Register multiple checks at once
    pub fn register_all(&mut self, checks: impl IntoIterator<Item = Arc<dyn Check>>) {
        for check in checks {
            self.register(check);
        }
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Run every applicable check on one file's text
    ///
    /// Violations come back check by check, each check's in match order.
    pub fn check_file(&self, file: &SourceFile<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        for check in &self.checks {
            if !check.applies_to(file.name, &self.config) {
                continue;
            }
            let found = check.check(file, &self.config);
            debug!("{} found {} violations in {}", check.name(), found.len(), file.name);
            violations.extend(found);
        }
        violations
    }

    /// Check every path in order, recording into `violations`
    ///
    /// Missing or unreadable paths are reported to the observer and skipped;
    /// they never abort the run. Only observer failures are returned.
    pub fn run(
        &self,
        paths: &[PathBuf],
        files: &dyn FileSource,
        violations: &mut Violations,
        observer: &mut dyn RunObserver,
    ) -> Result<CheckSummary> {
        info!(
            "Checking {} files with {} checks",
            paths.len(),
            self.checks.len()
        );
        let mut summary = CheckSummary::default();

        for path in paths {
            let text = match files.read(path) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    summary.files_skipped += 1;
                    observer.file_skipped(&e)?;
                    continue;
                }
            };

            let name = display_name(path);
            observer.file_started(&name)?;
            summary.files_checked += 1;

            for violation in self.check_file(&SourceFile::new(&name, &text)) {
                summary.add(&violation.check, 1);
                violations.record(violation.clone());
                observer.violation(&violation)?;
            }
        }

        info!(
            "Checked {} files ({} skipped), {} violations",
            summary.files_checked,
            summary.files_skipped,
            violations.len()
        );
        Ok(summary)
    }
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::with_default_checks(LintConfig::default())
    }
}
