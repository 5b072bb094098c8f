/// Tag-name heuristics for loosely-typed accessibility trees. Platforms
/// disagree on element naming (web "button" vs Android
/// "android.widget.Button" vs iOS "XCUIElementTypeButton"), so exact names
/// are matched case-insensitively and widget-class names by substring.
const INTERACTIVE_TAGS: &[&str] = &["button", "link", "input", "select", "textarea"];

pub fn is_interactive(tag: &str) -> bool {
    let tag = tag.to_lowercase();
    INTERACTIVE_TAGS.contains(&tag.as_str())
        || tag.contains("button")
        || tag.contains("clickable")
}

pub fn is_image(tag: &str) -> bool {
    let tag = tag.to_lowercase();
    tag == "img" || tag.contains("image")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_interactive_tags() {
        for tag in ["button", "link", "input", "select", "textarea"] {
            assert!(is_interactive(tag), "{tag} should be interactive");
        }
    }

    #[test]
    fn interactive_is_case_insensitive() {
        assert!(is_interactive("Button"));
        assert!(is_interactive("LINK"));
    }

    #[test]
    fn widget_class_names_match_by_substring() {
        assert!(is_interactive("android.widget.Button"));
        assert!(is_interactive("XCUIElementTypeButton"));
        assert!(is_interactive("ClickableSpan"));
    }

    #[test]
    fn non_interactive_tags() {
        assert!(!is_interactive("view"));
        assert!(!is_interactive("text"));
        assert!(!is_interactive("image"));
    }

    #[test]
    fn image_tags() {
        assert!(is_image("image"));
        assert!(is_image("img"));
        assert!(is_image("Image"));
        assert!(is_image("android.widget.ImageView"));
        assert!(is_image("XCUIElementTypeImage"));
    }

    #[test]
    fn non_image_tags() {
        assert!(!is_image("view"));
        assert!(!is_image("button"));
        assert!(!is_image("icon"));
    }
}
