use rayon::prelude::*;

use crate::score::{self, ScoreError};
use crate::types::{AccessibilityNode, ScanReport, ScreenInput, ScreenReport};

/// Detect issues in one accessibility tree and derive its score.
pub fn scan(tree: &AccessibilityNode) -> Result<ScanReport, ScoreError> {
    let issues = crate::detect::detect(tree);
    let score = score::calculate_score(&issues)?;
    Ok(ScanReport { issues, score })
}

/// Scan a batch of screens in parallel.
///
/// Uses Rayon's `par_iter()` — each screen is an independent, stateless
/// scan, so no coordination is needed. Output order matches input order.
///
/// This is the hot path for automation runs that submit a whole session's
/// screens at once.
pub fn scan_screens(screens: &[ScreenInput]) -> Result<Vec<ScreenReport>, ScoreError> {
    screens
        .par_iter()
        .map(|screen| {
            let report = scan(&screen.tree)?;
            Ok(ScreenReport {
                screen_name: screen.screen_name.clone(),
                issues: report.issues,
                score: report.score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::test_util::{bounds, node};

    /// A typical screen: header text, a labeled submit button, an unlabeled
    /// hero image.
    fn sample_screen() -> AccessibilityNode {
        let mut heading = node("text");
        heading.text = Some("Welcome to our app".to_string());
        heading.bounds = Some(bounds(335.0, 30.0));

        let mut submit = node("button");
        submit.text = Some("Submit".to_string());
        submit.accessibility_label = Some("Submit button".to_string());
        submit.bounds = Some(bounds(75.0, 44.0));

        let mut hero = node("image");
        hero.bounds = Some(bounds(175.0, 100.0));

        let mut section = node("view");
        section.children = Some(vec![heading, submit, hero]);

        let mut root = node("view");
        root.bounds = Some(bounds(375.0, 812.0));
        root.children = Some(vec![section]);
        root
    }

    #[test]
    fn scan_pairs_issues_with_score() {
        let report = scan(&sample_screen()).unwrap();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].title, "Missing alt text for image");
        // One high issue: overall 100-7, perceivable 100-(7/25)*100
        assert_eq!(report.score.overall, 93);
        assert_eq!(report.score.perceivable, 72);
        assert_eq!(report.score.total_issues, 1);
        assert_eq!(report.score.high_issues, 1);
    }

    #[test]
    fn clean_screen_scores_100() {
        let report = scan(&node("view")).unwrap();
        assert!(report.issues.is_empty());
        assert_eq!(report.score.overall, 100);
    }

    #[test]
    fn batch_preserves_input_order_and_names() {
        let screens = vec![
            ScreenInput {
                screen_name: "Home".to_string(),
                tree: sample_screen(),
            },
            ScreenInput {
                screen_name: "Settings".to_string(),
                tree: node("view"),
            },
            ScreenInput {
                screen_name: "Login".to_string(),
                tree: node("image"),
            },
        ];
        let reports = scan_screens(&screens).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].screen_name, "Home");
        assert_eq!(reports[1].screen_name, "Settings");
        assert_eq!(reports[2].screen_name, "Login");
        assert_eq!(reports[0].issues.len(), 1);
        assert!(reports[1].issues.is_empty());
        assert_eq!(reports[2].score.overall, 93);
    }

    #[test]
    fn empty_batch_returns_empty() {
        assert!(scan_screens(&[]).unwrap().is_empty());
    }

    #[test]
    fn many_screens_stress() {
        // 50 screens to exercise rayon's work splitting
        let screens: Vec<ScreenInput> = (0..50)
            .map(|i| ScreenInput {
                screen_name: format!("screen_{i}"),
                tree: sample_screen(),
            })
            .collect();
        let reports = scan_screens(&screens).unwrap();
        assert_eq!(reports.len(), 50);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.screen_name, format!("screen_{i}"));
            assert_eq!(report.score.overall, 93);
        }
    }
}
