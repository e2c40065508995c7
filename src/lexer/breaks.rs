use std::sync::LazyLock;

use regex::Regex;

static THEMATIC_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").expect("valid regex"));

/// A line made of three or more repeats of `-`, `*`, or `_` (surrounding
/// whitespace ignored) is a thematic break.
pub(crate) fn is_thematic_break(line: &str) -> bool {
    THEMATIC_BREAK_RE.is_match(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_shapes() {
        assert!(is_thematic_break("---"));
        assert!(is_thematic_break("*****"));
        assert!(is_thematic_break("  ___  "));
        assert!(!is_thematic_break("--"));
        assert!(!is_thematic_break("- - -"));
        assert!(!is_thematic_break("--*"));
    }
}
