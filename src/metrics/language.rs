//! @ai:module:intent Normalize judge language labels and render usage counts
//! @ai:module:layer domain
//! @ai:module:public_api normalize_language, render_usage, parse_language_usage
//! @ai:module:stateless true

use regex::Regex;
use std::sync::OnceLock;

/// Substring aliases, applied in order against the label as rewritten so far.
const LANGUAGE_ALIASES: [(&str, &str); 5] = [
    ("py", "Python"),
    ("c++", "C++"),
    ("java", "Java"),
    ("gnu c", "C"),
    ("javascript", "Javascript"),
];

/// @ai:intent Map a raw judge label such as "GNU C++17" to a display name
/// @ai:effects pure
pub fn normalize_language(raw: &str) -> String {
    let mut label = raw.to_lowercase();

    for (needle, canonical) in LANGUAGE_ALIASES {
        if label.contains(needle) {
            label = canonical.to_string();
        }
    }

    label
}

/// @ai:intent Render ranked counts as "Label (count), Label (count)"
/// @ai:effects pure
pub fn render_usage(ranked: &[(String, usize)]) -> String {
    ranked
        .iter()
        .map(|(label, count)| format!("{} ({})", label, count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn usage_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?P<label>.+?) \((?P<count>\d+)\)(?:, |$)").expect("usage pattern is valid")
    })
}

/// @ai:intent Recover (label, count) pairs from a rendered usage string
/// @ai:effects pure
pub fn parse_language_usage(rendered: &str) -> Vec<(String, usize)> {
    // Labels may themselves contain ", ", so entries end at "(count)".
    usage_pattern()
        .captures_iter(rendered)
        .filter_map(|caps| {
            let count = caps["count"].parse().ok()?;
            Some((caps["label"].to_string(), count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_common_labels() {
        assert_eq!(normalize_language("GNU C++17"), "C++");
        assert_eq!(normalize_language("GNU C++20 (64)"), "C++");
        assert_eq!(normalize_language("PyPy 3-64"), "Python");
        assert_eq!(normalize_language("Python 3"), "Python");
        assert_eq!(normalize_language("Java 21"), "Java");
        assert_eq!(normalize_language("GNU C11"), "C");
    }

    #[test]
    fn test_unknown_label_is_lowercased() {
        assert_eq!(normalize_language("Kotlin 1.9"), "kotlin 1.9");
        assert_eq!(normalize_language("Rust 2021"), "rust 2021");
    }

    #[test]
    fn test_javascript_label_folds_into_java() {
        // "java" rewrites the label before the "javascript" alias is tested
        assert_eq!(normalize_language("JavaScript V8 4.8.0"), "Java");
    }

    #[test]
    fn test_render_usage() {
        let ranked = vec![("C++".to_string(), 12), ("Python".to_string(), 3)];
        assert_eq!(render_usage(&ranked), "C++ (12), Python (3)");
        assert_eq!(render_usage(&[]), "");
    }

    #[test]
    fn test_parse_recovers_rendered_counts() {
        let ranked = vec![
            ("C++".to_string(), 40),
            ("kotlin 1.7 (jvm)".to_string(), 2),
            ("Python".to_string(), 1),
        ];

        assert_eq!(parse_language_usage(&render_usage(&ranked)), ranked);
    }

    #[test]
    fn test_parse_keeps_commas_inside_labels() {
        let ranked = vec![
            ("c# 10, .net sdk 6.0".to_string(), 2),
            ("C++".to_string(), 1),
        ];

        assert_eq!(
            parse_language_usage("c# 10, .net sdk 6.0 (2), C++ (1)"),
            ranked
        );
        assert_eq!(parse_language_usage(&render_usage(&ranked)), ranked);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_language_usage("").is_empty());
    }
}
