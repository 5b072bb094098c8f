#[macro_use]
extern crate napi_derive;

pub mod detect;
pub mod engine;
pub mod math;
pub mod score;
pub mod types;

use napi::{Error, Result, Status};

use types::{A11yScore, AccessibilityNode, Issue, ScanReport, ScreenInput, ScreenReport};

fn invalid_arg(err: impl std::fmt::Display) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

#[napi]
pub fn health_check() -> String {
    "a11y-scanner-native ok".to_string()
}

/// Walk an accessibility tree and return detected issues in traversal
/// order, without id/createdAt (the backend assigns identity).
#[napi]
pub fn detect_issues(tree: AccessibilityNode) -> Vec<Issue> {
    detect::detect(&tree)
}

/// Reduce an issue list to its score record. Issues with unrecognized
/// severity/category strings are rejected as invalid arguments.
#[napi]
pub fn calculate_score(issues: Vec<Issue>) -> Result<A11yScore> {
    score::calculate_score(&issues).map_err(invalid_arg)
}

/// Detect and score one screen in a single call.
#[napi]
pub fn scan_screen(tree: AccessibilityNode) -> Result<ScanReport> {
    engine::scan(&tree).map_err(invalid_arg)
}

/// Scan a batch of screens in parallel (one independent scan per screen).
#[napi]
pub fn scan_screens(screens: Vec<ScreenInput>) -> Result<Vec<ScreenReport>> {
    engine::scan_screens(&screens).map_err(invalid_arg)
}

/// Scan a raw platform dump. Accepts any JSON object shaped like an
/// accessibility tree; malformed JSON or a structurally invalid root is
/// rejected rather than scanned partially.
#[napi]
pub fn scan_screen_json(tree_json: String) -> Result<ScanReport> {
    let tree: AccessibilityNode = serde_json::from_str(&tree_json).map_err(invalid_arg)?;
    engine::scan(&tree).map_err(invalid_arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_entry_point_scans_platform_dump() {
        let report = scan_screen_json(
            r#"{
                "type": "view",
                "children": [
                    {"type": "image", "bounds": {"x": 0, "y": 0, "width": 10, "height": 10}},
                    {"type": "button", "text": "OK",
                     "bounds": {"x": 0, "y": 0, "width": 30, "height": 30}}
                ]
            }"#
            .to_string(),
        )
        .unwrap();
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.score.total_issues, 2);
    }

    #[test]
    fn json_entry_point_ignores_unknown_fields() {
        // Platform dumps carry extra metadata the core does not model
        let report = scan_screen_json(
            r#"{"type": "view", "resourceId": "root", "focused": false}"#.to_string(),
        )
        .unwrap();
        assert_eq!(report.score.overall, 100);
    }

    #[test]
    fn malformed_json_is_invalid_arg() {
        let err = scan_screen_json("{not json".to_string()).unwrap_err();
        assert_eq!(err.status, Status::InvalidArg);
    }

    #[test]
    fn non_object_root_is_invalid_arg() {
        let err = scan_screen_json("[1, 2, 3]".to_string()).unwrap_err();
        assert_eq!(err.status, Status::InvalidArg);
    }

    #[test]
    fn health_check_reports_crate() {
        assert_eq!(health_check(), "a11y-scanner-native ok");
    }
}
