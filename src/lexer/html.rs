use std::sync::LazyLock;

use regex::Regex;

use crate::lexer::Lexer;
use crate::syntax::Token;

/// Opening tags that start an HTML block rather than an inline span.
static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^<(h[1-6]|div|table|pre|blockquote|ul|ol|li|p|section|article|header|footer|nav|aside|hr|form|iframe)\b",
    )
    .expect("valid regex")
});

static TAG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<\s*([a-zA-Z0-9]+)").expect("valid regex"));

/// Elements that never take a closing tag.
const VOID_TAGS: [&str; 6] = ["hr", "img", "br", "input", "meta", "link"];

/// Consume an HTML comment, emitting nothing. An unterminated comment eats
/// the rest of the input.
pub(crate) fn lex_comment(lexer: &mut Lexer) -> bool {
    if !lexer.cursor().starts_with("<!--") {
        return false;
    }
    lexer.cursor_mut().read_until_literal("-->", true);
    log::trace!("skipped HTML comment");
    true
}

/// Consume an HTML tag and everything up to its matching closing tag,
/// emitting a block or inline HTML token depending on the tag name.
pub(crate) fn lex_html(lexer: &mut Lexer) -> bool {
    if lexer.cursor().peek(0) != Some('<') {
        return false;
    }

    // Classify before consuming: block-level tags end paragraphs, anything
    // else stays inline.
    let head = {
        let rest = lexer.cursor().rest();
        match rest.find('>') {
            Some(i) => &rest[..i],
            None => rest,
        }
    };
    let is_block = BLOCK_TAG_RE.is_match(head);

    let open_tag = format!("{}>", lexer.cursor_mut().read_until('>', true));

    let Some(tag_name) = TAG_NAME_RE
        .captures(&open_tag)
        .map(|caps| caps[1].to_string())
    else {
        // No tag name to be found; keep the angle bracket as literal text.
        lexer.push_text("<");
        return true;
    };

    if open_tag.ends_with("/>") || VOID_TAGS.contains(&tag_name.as_str()) {
        lexer.push_token(Token::HtmlBlock { value: open_tag });
        return true;
    }

    let close_tag = format!("</{tag_name}>");
    let content = read_until_tag_nocase(lexer, &close_tag);
    let value = format!("{open_tag}{content}{close_tag}");

    log::trace!("lexed {} HTML element <{tag_name}>", if is_block { "block" } else { "inline" });

    lexer.push_token(if is_block {
        Token::HtmlBlock { value }
    } else {
        Token::HtmlInline { value }
    });
    true
}

/// Scan for a case-insensitive occurrence of `close_tag` with a sliding
/// byte-window compare, consuming the content and the tag. An unterminated
/// element consumes the rest of the input.
fn read_until_tag_nocase(lexer: &mut Lexer, close_tag: &str) -> String {
    let rest = lexer.cursor().rest();
    let haystack = rest.as_bytes();
    let needle = close_tag.as_bytes();

    let mut found = None;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            found = Some(i);
            break;
        }
        i += 1;
    }

    match found {
        Some(i) => {
            let content = rest[..i].to_string();
            lexer.cursor_mut().advance_bytes(i + needle.len());
            content
        }
        None => {
            let content = rest.to_string();
            lexer.cursor_mut().advance_bytes(rest.len());
            content
        }
    }
}
