//! Text (terminal) reporter
//!
//! Styling goes through `console`, which drops it when the output is not a
//! terminal.

use crate::checks::{CheckSummary, RunObserver, SourceError};
use crate::models::{Severity, Violation, Violations};
use crate::scoring::Score;
use anyhow::Result;
use console::{style, Style};
use std::io::Write;

/// Horizontal rule framing the summary block
pub const RULE: &str = "============================================================";

/// Marker glyph for a live violation line
fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️",
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Error => Style::new().red(),
        Severity::Warning => Style::new().yellow(),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Writes the live stream: a header per file and a line per violation
pub struct LiveReporter<W: Write> {
    out: W,
}

impl<W: Write> LiveReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RunObserver for LiveReporter<W> {
    fn file_started(&mut self, file_name: &str) -> Result<()> {
        writeln!(self.out, "\nChecking file: {}", style(file_name).bold())?;
        Ok(())
    }

    fn violation(&mut self, violation: &Violation) -> Result<()> {
        writeln!(
            self.out,
            "  {} {}",
            marker(violation.severity),
            severity_style(violation.severity).apply_to(&violation.message)
        )?;
        Ok(())
    }

    fn file_skipped(&mut self, error: &SourceError) -> Result<()> {
        writeln!(self.out, "{} {}", style("warning:").yellow().bold(), error)?;
        Ok(())
    }
}

/// Render the final summary block
///
/// The numbered listing is only included when the deduction is positive,
/// so a warnings-only run shows counts but no list. Paths that could not be
/// read are counted so a run that checked nothing is not mistaken for a
/// clean one.
pub fn render_summary(score: &Score, violations: &Violations, run: &CheckSummary) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{}\n", style("Code Style Check Results").bold()));
    out.push_str(RULE);
    out.push('\n');

    if run.files_skipped > 0 {
        out.push_str(&format!(
            "{} Skipped {} that could not be read\n",
            marker(Severity::Warning),
            style(plural(run.files_skipped, "file", "files")).yellow()
        ));
    }

    if violations.is_empty() {
        out.push_str(&format!("{} No style issues found\n", style("✅").green()));
        out.push_str("Deduction: 0\n");
    } else {
        let summary = &score.summary;
        out.push_str(&format!(
            "Found {} ({}, {})\n",
            plural(summary.total, "style issue", "style issues"),
            plural(summary.errors, "error", "errors"),
            plural(summary.warnings, "warning", "warnings"),
        ));
        for (check, count) in &summary.by_check {
            out.push_str(&format!("  {check}: {count}\n"));
        }

        if score.deduction > 0 {
            out.push_str(&format!(
                "Deduction: {}\n",
                style(format!("-{}", score.deduction)).red().bold()
            ));
            out.push_str("\nIssues:\n");
            for (i, v) in violations.iter().enumerate() {
                out.push_str(&format!("{}. [{}] {}\n", i + 1, v.file, v.message));
            }
        } else {
            out.push_str("Deduction: 0\n");
        }
    }

    out.push_str(RULE);
    out.push('\n');
    out
}
