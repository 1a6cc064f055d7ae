use crate::config::ScoringConfig;
use crate::models::{Violations, ViolationsSummary};

/// Deduction for a number of error-severity violations
///
/// Arithmetic saturates, so any count past the clamp point yields
/// `max_deduction`.
pub fn deduction(error_count: usize, config: &ScoringConfig) -> u32 {
    if error_count == 0 {
        return 0;
    }
    let additional = u32::try_from(error_count - 1).unwrap_or(u32::MAX);
    config
        .first_error
        .saturating_add(additional.saturating_mul(config.per_additional_error))
        .min(config.max_deduction)
}

/// Outcome of a whole run: counts plus the deduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub deduction: u32,
    pub summary: ViolationsSummary,
}

impl Score {
    pub fn from_violations(violations: &Violations, config: &ScoringConfig) -> Self {
        let summary = ViolationsSummary::from_violations(violations.as_slice());
        Self {
            deduction: deduction(summary.errors, config),
            summary,
        }
    }

    /// Process exit status for this score
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.deduction).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Violation;

    fn score_for(errors: usize, warnings: usize) -> Score {
        let mut violations = Violations::new();
        for i in 0..errors {
            violations.record(Violation::error("class-names", "a.h", format!("e{i}")));
        }
        for i in 0..warnings {
            violations.record(Violation::warning("global-variables", "a.cpp", format!("w{i}")));
        }
        Score::from_violations(&violations, &ScoringConfig::default())
    }

    #[test]
    fn test_deduction_steps() {
        let config = ScoringConfig::default();
        assert_eq!(deduction(0, &config), 0);
        assert_eq!(deduction(1, &config), 10);
        assert_eq!(deduction(2, &config), 12);
        assert_eq!(deduction(3, &config), 14);
        assert_eq!(deduction(5, &config), 18);
        assert_eq!(deduction(6, &config), 20);
        assert_eq!(deduction(100, &config), 20);
    }

    #[test]
    fn test_deduction_is_monotonic_and_clamped() {
        let config = ScoringConfig::default();
        let mut previous = 0;
        for n in 0..50 {
            let d = deduction(n, &config);
            assert!(d >= previous, "deduction dropped at {n}");
            assert!(d <= 20);
            previous = d;
        }
    }

    #[test]
    fn test_deduction_saturates_on_huge_counts() {
        assert_eq!(deduction(usize::MAX, &ScoringConfig::default()), 20);
    }

    #[test]
    fn test_custom_scoring_constants() {
        let config = ScoringConfig {
            first_error: 5,
            per_additional_error: 5,
            max_deduction: 100,
        };
        assert_eq!(deduction(1, &config), 5);
        assert_eq!(deduction(4, &config), 20);
        assert_eq!(deduction(1000, &config), 100);
    }

    #[test]
    fn test_warnings_never_change_deduction() {
        assert_eq!(score_for(0, 7).deduction, 0);
        assert_eq!(score_for(1, 0).deduction, 10);
        assert_eq!(score_for(1, 12).deduction, 10);
        assert_eq!(score_for(3, 4).deduction, 14);
        assert_eq!(score_for(3, 4).summary.total, 7);
    }

    #[test]
    fn test_exit_code_equals_deduction() {
        assert_eq!(score_for(0, 0).exit_code(), 0);
        assert_eq!(score_for(2, 1).exit_code(), 12);
        assert_eq!(score_for(40, 0).exit_code(), 20);
    }
}
