//! CLI command definitions and handlers

mod check;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub use check::run_check;

/// cppstyle - C++ naming-convention linter
///
/// Exit status is the deduction (0 when there are no errors).
#[derive(Parser, Debug)]
#[command(name = "cppstyle")]
#[command(
    version,
    about = "Naming-convention and structural linter for C++ sources",
    long_about = "Checks function, variable, class and macro names, file-scope \
variables and header include guards against a fixed style guide.\n\n\
The exit status is the penalty: 0 with no errors, 10 for the first error, \
2 more for each further error, capped at 20.",
    after_help = "\
Examples:
  cppstyle src/main.cpp src/Song.h     Check two files
  cppstyle $(git ls-files '*.cpp' '*.h')   Check every tracked C++ file"
)]
pub struct Cli {
    /// Files to check
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Run the CLI and return the process exit status
pub fn run(cli: Cli) -> Result<i32> {
    if cli.files.is_empty() {
        eprintln!("Usage: cppstyle <FILE>...");
        return Ok(1);
    }
    run_check(&cli.files)
}
