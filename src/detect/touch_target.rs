//! Undersized touch targets — WCAG 2.5.5 Target Size (Level AA).

use crate::detect::tags;
use crate::types::{AccessibilityNode, Category, ElementSnapshot, Issue, Severity, WcagLevel};

/// Minimum touch-target edge in platform logical units (44pt/44dp).
pub const MIN_TOUCH_TARGET: f64 = 44.0;

pub fn check(node: &AccessibilityNode) -> Option<Issue> {
    if !tags::is_interactive(&node.node_type) {
        return None;
    }
    // No bounds reported → rule does not apply
    let bounds = node.bounds.as_ref()?;
    if bounds.width >= MIN_TOUCH_TARGET && bounds.height >= MIN_TOUCH_TARGET {
        return None;
    }

    Some(Issue {
        title: "Touch target too small".to_string(),
        description: format!(
            "Touch targets should be at least {min}x{min}pt to be easily tappable. \
             Current size: {}x{}pt.",
            bounds.width,
            bounds.height,
            min = MIN_TOUCH_TARGET as u32,
        ),
        severity: Severity::Medium.as_str().to_string(),
        category: Category::Operable.as_str().to_string(),
        wcag_level: WcagLevel::Aa.as_str().to_string(),
        wcag_criteria: "2.5.5".to_string(),
        element: ElementSnapshot {
            tag_name: node.node_type.clone(),
            text: node.text.clone(),
            bounds: Some(bounds.clone()),
        },
    })
}
