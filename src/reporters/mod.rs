//! Output reporters for cppstyle runs
//!
//! Two observation points:
//! - the live stream, one line per violation as it is detected
//! - the final summary, rendered once after every file is checked

mod text;

pub use text::{render_summary, LiveReporter, RULE};
