use std::sync::LazyLock;

use regex::Regex;

use crate::lexer::Lexer;
use crate::syntax::Token;

static TASK_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([-*+]) \[( |x|X)\] ").expect("valid regex"));

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*+] ").expect("valid regex"));

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d+)\. ").expect("valid regex"));

static ANY_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([-+*]|\d+\.) ").expect("valid regex"));

/// Whether the line still looks like a list item of any style. While lists
/// are open, the first line that does not closes them all.
pub(crate) fn is_any_item(line: &str) -> bool {
    ANY_ITEM_RE.is_match(line)
}

/// `- [x] item` — a task item. Opens/closes lists to match the indentation
/// and consumes everything through the space after the checkbox.
pub(crate) fn lex_task_item(lexer: &mut Lexer) -> bool {
    let line = lexer.cursor().peek_line();
    let Some(caps) = TASK_ITEM_RE.captures(line) else {
        return false;
    };
    let indent = caps[1].len();
    let checked = caps[3].eq_ignore_ascii_case("x");
    adjust_depth(lexer, indent / 2 + 1, false);
    lexer.push_token(Token::TaskItem { checked });
    lexer.cursor_mut().advance_bytes(indent + 6);
    true
}

/// `- item` (also `+` and `*`).
pub(crate) fn lex_unordered_item(lexer: &mut Lexer) -> bool {
    let line = lexer.cursor().peek_line();
    let Some(caps) = UNORDERED_ITEM_RE.captures(line) else {
        return false;
    };
    let indent = caps[1].len();
    adjust_depth(lexer, indent / 2 + 1, false);
    lexer.push_token(Token::ListItem);
    lexer.cursor_mut().advance_bytes(indent + 2);
    true
}

/// `1. item` — any digit run followed by a dot.
pub(crate) fn lex_ordered_item(lexer: &mut Lexer) -> bool {
    let line = lexer.cursor().peek_line();
    let Some(caps) = ORDERED_ITEM_RE.captures(line) else {
        return false;
    };
    let indent = caps[1].len();
    let digits = caps[2].len();
    adjust_depth(lexer, indent / 2 + 1, true);
    lexer.push_token(Token::ListItem);
    lexer.cursor_mut().advance_bytes(indent + digits + 2);
    true
}

/// Two indentation spaces equal one nesting level. Emits the start/end
/// markers needed to move from the current depth to the target.
fn adjust_depth(lexer: &mut Lexer, target: usize, ordered: bool) {
    while lexer.list_depth() < target {
        lexer.open_list(ordered);
    }
    while lexer.list_depth() > target {
        lexer.close_list();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Token;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize(false)
    }

    #[test]
    fn test_item_shapes() {
        assert!(is_any_item("- a"));
        assert!(is_any_item("  + b"));
        assert!(is_any_item("12. c"));
        assert!(!is_any_item("-a"));
        assert!(!is_any_item("text"));
    }

    #[test]
    fn test_flat_list() {
        assert_eq!(tokens("- a\n- b"), vec![
            Token::ListStart {
                level: 1,
                ordered: false
            },
            Token::ListItem,
            Token::Text {
                value: "a".to_string()
            },
            Token::NewLine,
            Token::ListItem,
            Token::Text {
                value: "b".to_string()
            },
            Token::ListEnd,
        ]);
    }

    #[test]
    fn test_nested_list_depth_transitions() {
        let toks = tokens("- a\n  - b\n- c");
        let starts = toks
            .iter()
            .filter(|t| matches!(t, Token::ListStart { .. }))
            .count();
        let ends = toks
            .iter()
            .filter(|t| matches!(t, Token::ListEnd))
            .count();
        assert_eq!(starts, 2);
        assert_eq!(ends, 2);
        assert!(toks.contains(&Token::ListStart {
            level: 2,
            ordered: false
        }));
    }

    #[test]
    fn test_ordered_multi_digit_marker() {
        assert_eq!(tokens("12. a"), vec![
            Token::ListStart {
                level: 1,
                ordered: true
            },
            Token::ListItem,
            Token::Text {
                value: "a".to_string()
            },
            Token::ListEnd,
        ]);
    }

    #[test]
    fn test_task_items() {
        assert_eq!(tokens("- [ ] x\n- [X] y"), vec![
            Token::ListStart {
                level: 1,
                ordered: false
            },
            Token::TaskItem { checked: false },
            Token::Text {
                value: "x".to_string()
            },
            Token::NewLine,
            Token::TaskItem { checked: true },
            Token::Text {
                value: "y".to_string()
            },
            Token::ListEnd,
        ]);
    }

    #[test]
    fn test_non_item_line_closes_all_lists() {
        let toks = tokens("- a\n  - b\nplain");
        let ends = toks
            .iter()
            .filter(|t| matches!(t, Token::ListEnd))
            .count();
        assert_eq!(ends, 2);
        assert_eq!(toks.last(), Some(&Token::Text {
            value: "plain".to_string()
        }));
    }
}
