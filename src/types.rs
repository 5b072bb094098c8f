use napi_derive::napi;
use serde::{Deserialize, Serialize};

/// Issue severity. Weights drive the score calculation in `score.rs`.
/// Crosses the NAPI boundary as its lowercase string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Penalty weight used by the score calculator.
    pub const fn weight(self) -> u32 {
        match self {
            Severity::Critical => 10,
            Severity::High => 7,
            Severity::Medium => 4,
            Severity::Low => 2,
            Severity::Info => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }
}

/// WCAG principle an issue falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Perceivable,
        Category::Operable,
        Category::Understandable,
        Category::Robust,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Perceivable => "perceivable",
            Category::Operable => "operable",
            Category::Understandable => "understandable",
            Category::Robust => "robust",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "perceivable" => Some(Category::Perceivable),
            "operable" => Some(Category::Operable),
            "understandable" => Some(Category::Understandable),
            "robust" => Some(Category::Robust),
            _ => None,
        }
    }
}

/// WCAG conformance level of the violated criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    A,
    Aa,
    Aaa,
}

impl WcagLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            WcagLevel::A => "A",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

/// Screen-space rectangle of a node, in platform logical units.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One node of the platform accessibility tree handed over by the JS host.
/// Every field except `type` is optional; the detector treats a missing
/// field as "rule does not apply", never as an error.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityNode {
    /// Platform element tag: "view" | "text" | "button" | "image" | "link" | ...
    #[napi(js_name = "type")]
    #[serde(rename = "type")]
    pub node_type: String,
    pub bounds: Option<NodeBounds>,
    pub accessibility_label: Option<String>,
    pub text: Option<String>,
    /// Any CSS color value ("#1e293b", "rgb(30 41 59)", "slategray", ...).
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub children: Option<Vec<AccessibilityNode>>,
}

/// Snapshot of the offending node attached to an issue. Display-only; no
/// further computation reads it.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    pub tag_name: String,
    pub text: Option<String>,
    pub bounds: Option<NodeBounds>,
}

/// A detected accessibility issue, ready to persist as-is. The backend
/// attaches `id` and `createdAt`; the native core is agnostic to identity.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub title: String,
    pub description: String,
    /// "critical" | "high" | "medium" | "low" | "info"
    pub severity: String,
    /// "perceivable" | "operable" | "understandable" | "robust"
    pub category: String,
    /// "A" | "AA" | "AAA"
    pub wcag_level: String,
    /// WCAG success-criterion number, e.g. "1.1.1"
    pub wcag_criteria: String,
    pub element: ElementSnapshot,
}

/// Weighted 0-100 score for one scan, overall and per WCAG principle, plus
/// per-severity issue counts. Recomputed from the full issue list on every
/// scan, never patched incrementally.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A11yScore {
    pub overall: u32,
    pub perceivable: u32,
    pub operable: u32,
    pub understandable: u32,
    pub robust: u32,
    pub total_issues: u32,
    pub critical_issues: u32,
    pub high_issues: u32,
    pub medium_issues: u32,
    pub low_issues: u32,
}

/// Detector output plus its derived score; the unit the backend persists.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub issues: Vec<Issue>,
    pub score: A11yScore,
}

/// One screen submitted to the batch entry point.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInput {
    pub screen_name: String,
    pub tree: AccessibilityNode,
}

/// Batch result: the screen name passed through alongside its report.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenReport {
    pub screen_name: String,
    pub issues: Vec<Issue>,
    pub score: A11yScore,
}
