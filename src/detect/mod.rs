pub mod alt_text;
pub mod contrast;
pub mod label;
pub mod tags;
pub mod touch_target;

use crate::types::{AccessibilityNode, Issue};

/// Walk an accessibility tree and collect every detected issue.
///
/// Depth-first pre-order: a node is inspected before its children, every
/// node exactly once, and the output order follows the traversal. Rules are
/// independent and non-exclusive — one node can produce several issues.
/// Pure function of the tree; recursion depth equals tree depth.
pub fn detect(root: &AccessibilityNode) -> Vec<Issue> {
    let mut issues = Vec::new();
    walk(root, &mut issues);
    issues
}

fn walk(node: &AccessibilityNode, issues: &mut Vec<Issue>) {
    if let Some(issue) = alt_text::check(node) {
        issues.push(issue);
    }
    if let Some(issue) = touch_target::check(node) {
        issues.push(issue);
    }
    if let Some(issue) = label::check(node) {
        issues.push(issue);
    }
    if let Some(issue) = contrast::check(node) {
        issues.push(issue);
    }

    // Unknown node types produce no issues but their children are still visited
    if let Some(children) = &node.children {
        for child in children {
            walk(child, issues);
        }
    }
}

/// JS hosts send both absent fields and empty strings for "no value".
pub(crate) fn has_content(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}
