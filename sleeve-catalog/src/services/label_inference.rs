//! Record-label inference from free-text copyright notices.
//!
//! The primary catalog has no label field, but album-level records carry a
//! copyright string that usually embeds one ("℗ 2019 Dais Records, ...").
//! An ordered pattern list is tried and the first match wins; each capture
//! runs up to the next comma or period. The phonogram notice outranks the
//! standard copyright notice, which outranks license-transfer phrasing.

use std::sync::OnceLock;

use regex::Regex;

/// Patterns in priority order.
fn label_patterns() -> &'static [Regex; 4] {
    static PATTERNS: OnceLock<[Regex; 4]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"(?i)℗\s*\d{4}\s*([^.,]+)").expect("invalid phonogram pattern"),
            Regex::new(r"(?i)©\s*\d{4}\s*([^.,]+)").expect("invalid copyright pattern"),
            Regex::new(r"(?i)under (?:exclusive )?license to\s*([^.,]+)")
                .expect("invalid license pattern"),
            Regex::new(r"(?i)under (?:exclusive )?licence to\s*([^.,]+)")
                .expect("invalid licence pattern"),
        ]
    })
}

/// Infer a label name from a copyright notice.
///
/// Returns `None` for absent or blank input and when no pattern matches;
/// never an error. The captured text is trimmed of surrounding whitespace.
pub fn infer_label_from_copyright(copyright: Option<&str>) -> Option<String> {
    let text = copyright?.trim();
    if text.is_empty() {
        return None;
    }

    for pattern in label_patterns() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(matched) = captures.get(1) {
                let label = matched.as_str().trim();
                if !label.is_empty() {
                    return Some(label.to_string());
                }
            }
        }
    }

    None
}
