//! Inline strategies: emphasis spans, code spans, links, raw inline HTML,
//! and footnote references.

use crate::parser::Parser;
use crate::syntax::{Node, Token, TokenKind};

pub(crate) fn parse_bold(parser: &mut Parser) -> Node {
    parser.advance(1);
    Node::Bold {
        children: parser.parse_inline_until(&[TokenKind::Bold], true),
    }
}

pub(crate) fn parse_italic(parser: &mut Parser) -> Node {
    parser.advance(1);
    Node::Italic {
        children: parser.parse_inline_until(&[TokenKind::Italic], true),
    }
}

pub(crate) fn parse_strikethrough(parser: &mut Parser) -> Node {
    parser.advance(1);
    Node::Strikethrough {
        children: parser.parse_inline_until(&[TokenKind::Strikethrough], true),
    }
}

pub(crate) fn parse_inline_code(parser: &mut Parser) -> Node {
    let content = match parser.peek(0) {
        Some(Token::InlineCode { content }) => content.clone(),
        _ => String::new(),
    };
    parser.advance(1);
    Node::InlineCode { content }
}

pub(crate) fn parse_link(parser: &mut Parser) -> Node {
    let (href, text) = match parser.peek(0) {
        Some(Token::Link { href, text }) => (href.clone(), text.clone()),
        _ => (String::new(), String::new()),
    };
    parser.advance(1);
    Node::Link { href, text }
}

pub(crate) fn parse_html_inline(parser: &mut Parser) -> Node {
    let value = match parser.peek(0) {
        Some(Token::HtmlInline { value }) => value.clone(),
        _ => String::new(),
    };
    parser.advance(1);
    Node::HtmlInline { value }
}

/// References register their first-use order as a side effect. The index a
/// renderer shows is only meaningful once the whole document has been
/// parsed.
pub(crate) fn parse_footnote_ref(parser: &mut Parser) -> Node {
    let id = match parser.peek(0) {
        Some(Token::FootnoteRef { id }) => id.clone(),
        _ => String::new(),
    };
    parser.advance(1);
    parser.resolver_mut().add_used_ref(&id);
    Node::FootnoteRef { id }
}
