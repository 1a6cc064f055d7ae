//! Check command - lint the given files and report the deduction

use crate::checks::{CheckEngine, DiskFiles, FileSource};
use crate::config::LintConfig;
use crate::models::Violations;
use crate::reporters::{render_summary, LiveReporter};
use crate::scoring::Score;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Check files on disk, print to stdout, and return the exit status
pub fn run_check(paths: &[PathBuf]) -> Result<i32> {
    let engine = CheckEngine::with_default_checks(LintConfig::default());
    debug!("Active checks: {:?}", engine.check_names());

    let stdout = std::io::stdout();
    let score = check_paths(&engine, paths, &DiskFiles, stdout.lock())?;
    Ok(score.exit_code())
}

/// Run the engine over `paths`, streaming and summarising into `out`
pub(crate) fn check_paths<W: Write>(
    engine: &CheckEngine,
    paths: &[PathBuf],
    files: &dyn FileSource,
    out: W,
) -> Result<Score> {
    let mut violations = Violations::new();
    let mut reporter = LiveReporter::new(out);

    let summary = engine
        .run(paths, files, &mut violations, &mut reporter)
        .context("Failed to write check output")?;
    debug!(
        "{} files checked, {} skipped, by check: {:?}",
        summary.files_checked, summary.files_skipped, summary.by_check
    );

    let score = Score::from_violations(&violations, &engine.config().scoring);

    let mut out = reporter.into_inner();
    out.write_all(render_summary(&score, &violations, &summary).as_bytes())
        .context("Failed to write summary")?;
    out.flush().context("Failed to flush output")?;

    Ok(score)
}
