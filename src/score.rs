//! Reduces one scan's issue list to a weighted 0-100 score record.

use std::fmt;

use crate::types::{A11yScore, Category, Issue, Severity};

/// Weight a scan can absorb before the overall score hits 0 — a single
/// critical issue costs 10 points, ten floor the score.
const OVERALL_BASELINE: f64 = 100.0;

/// Per-principle baseline. Smaller than the overall baseline so category
/// breakdowns degrade faster per unit weight.
const CATEGORY_BASELINE: f64 = 25.0;

/// Issue data with an unrecognized severity or category string. Callers are
/// expected to validate enums at the boundary; this is a precondition
/// violation, not a recoverable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    UnknownSeverity(String),
    UnknownCategory(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::UnknownSeverity(value) => {
                write!(f, "unknown issue severity: {value:?}")
            }
            ScoreError::UnknownCategory(value) => {
                write!(f, "unknown issue category: {value:?}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Compute the score record for one scan's full issue list.
///
/// Pure and total over enum-valid input; order-independent; defined for the
/// empty list (perfect score). Recomputed from scratch on every scan.
pub fn calculate_score(issues: &[Issue]) -> Result<A11yScore, ScoreError> {
    let mut critical = 0u32;
    let mut high = 0u32;
    let mut medium = 0u32;
    let mut low = 0u32;
    let mut total_weight = 0u32;
    let mut category_weight = [0u32; 4];

    for issue in issues {
        let severity = Severity::parse(&issue.severity)
            .ok_or_else(|| ScoreError::UnknownSeverity(issue.severity.clone()))?;
        let category = Category::parse(&issue.category)
            .ok_or_else(|| ScoreError::UnknownCategory(issue.category.clone()))?;

        match severity {
            Severity::Critical => critical += 1,
            Severity::High => high += 1,
            Severity::Medium => medium += 1,
            Severity::Low => low += 1,
            Severity::Info => {} // counted in the total, not surfaced
        }
        total_weight += severity.weight();
        category_weight[category as usize] += severity.weight();
    }

    Ok(A11yScore {
        overall: normalize(total_weight, OVERALL_BASELINE),
        perceivable: normalize(category_weight[Category::Perceivable as usize], CATEGORY_BASELINE),
        operable: normalize(category_weight[Category::Operable as usize], CATEGORY_BASELINE),
        understandable: normalize(
            category_weight[Category::Understandable as usize],
            CATEGORY_BASELINE,
        ),
        robust: normalize(category_weight[Category::Robust as usize], CATEGORY_BASELINE),
        total_issues: issues.len() as u32,
        critical_issues: critical,
        high_issues: high,
        medium_issues: medium,
        low_issues: low,
    })
}

/// 100 minus the weight's share of the baseline, clamped to [0, 100] and
/// rounded half-away-from-zero at the final step only.
fn normalize(weight: u32, baseline: f64) -> u32 {
    let score = 100.0 - (weight as f64 / baseline) * 100.0;
    score.clamp(0.0, 100.0).round() as u32
}
