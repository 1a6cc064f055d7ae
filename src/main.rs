//! cppstyle - C++ naming-convention linter
//!
//! Prints each violation as it is found, then a summary, and exits with
//! the deduction as the status code.

use anyhow::Result;
use clap::Parser;
use cppstyle::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging (stderr, so the report on stdout stays clean)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();
    let code = cli::run(cli)?;
    std::process::exit(code)
}
