//! Deduction scoring
//!
//! The deduction is the single penalty a run produces, and doubles as the
//! process exit status so CI can gate on it directly.
//!
//! # Scoring Formula
//!
//! ```text
//! errors = number of error-severity violations (warnings never count)
//!
//! errors == 0  ->  0
//! errors == 1  ->  10
//! errors >= 2  ->  min(20, 10 + (errors - 1) * 2)
//! ```
//!
//! # Example
//!
//! - 1 error, 5 warnings → 10
//! - 3 errors → 14
//! - 6 or more errors → 20 (clamped)

mod deduction;

pub use deduction::{deduction, Score};
