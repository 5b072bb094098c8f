//! Missing alt text on images — WCAG 1.1.1 Non-text Content (Level A).

use crate::detect::{has_content, tags};
use crate::types::{AccessibilityNode, Category, ElementSnapshot, Issue, Severity, WcagLevel};

pub fn check(node: &AccessibilityNode) -> Option<Issue> {
    if !tags::is_image(&node.node_type) {
        return None;
    }
    if has_content(node.accessibility_label.as_deref()) {
        return None;
    }

    Some(Issue {
        title: "Missing alt text for image".to_string(),
        description: "Image elements must have alternative text for screen readers to \
                      describe the content to users with visual impairments."
            .to_string(),
        severity: Severity::High.as_str().to_string(),
        category: Category::Perceivable.as_str().to_string(),
        wcag_level: WcagLevel::A.as_str().to_string(),
        wcag_criteria: "1.1.1".to_string(),
        element: ElementSnapshot {
            tag_name: node.node_type.clone(),
            text: None,
            bounds: node.bounds.clone(),
        },
    })
}
