//! Unnamed interactive controls — WCAG 2.1.1 Keyboard (Level A).
//!
//! A button or link with neither an accessibility label nor visible text has
//! no accessible name, so a screen reader cannot announce its purpose.

use crate::detect::has_content;
use crate::types::{AccessibilityNode, Category, ElementSnapshot, Issue, Severity, WcagLevel};

pub fn check(node: &AccessibilityNode) -> Option<Issue> {
    if node.node_type != "button" && node.node_type != "link" {
        return None;
    }
    if has_content(node.accessibility_label.as_deref()) || has_content(node.text.as_deref()) {
        return None;
    }

    Some(Issue {
        title: "Missing accessibility label".to_string(),
        description: "Interactive elements must have accessible names so screen readers \
                      can describe their purpose to users."
            .to_string(),
        severity: Severity::Critical.as_str().to_string(),
        category: Category::Operable.as_str().to_string(),
        wcag_level: WcagLevel::A.as_str().to_string(),
        wcag_criteria: "2.1.1".to_string(),
        element: ElementSnapshot {
            tag_name: node.node_type.clone(),
            text: None,
            bounds: node.bounds.clone(),
        },
    })
}
