//! Low text contrast — WCAG 1.4.3 Contrast (Minimum) (Level AA).
//!
//! Real relative-luminance math over parsed sRGB values; a color that fails
//! to parse makes the rule inapplicable rather than erroring the scan.

use crate::math::{color, wcag};
use crate::types::{AccessibilityNode, Category, ElementSnapshot, Issue, Severity, WcagLevel};

pub fn check(node: &AccessibilityNode) -> Option<Issue> {
    if node.node_type != "text" {
        return None;
    }
    let fg = color::parse_color(node.text_color.as_deref()?)?;
    let bg = color::parse_color(node.background_color.as_deref()?)?;

    let ratio = wcag::contrast_ratio(fg, bg);
    if ratio >= wcag::MIN_AA_TEXT_RATIO {
        return None;
    }

    Some(Issue {
        title: "Insufficient color contrast".to_string(),
        description: format!(
            "Text color contrast ratio is {ratio:.2}:1, which is below the WCAG AA \
             standard of {}:1.",
            wcag::MIN_AA_TEXT_RATIO,
        ),
        severity: Severity::Medium.as_str().to_string(),
        category: Category::Perceivable.as_str().to_string(),
        wcag_level: WcagLevel::Aa.as_str().to_string(),
        wcag_criteria: "1.4.3".to_string(),
        element: ElementSnapshot {
            tag_name: node.node_type.clone(),
            text: node.text.clone(),
            bounds: node.bounds.clone(),
        },
    })
}
