//! Block strategies with no nested bookkeeping: headers, code blocks,
//! quotes, images, rules, raw HTML, and footnote definitions.

use crate::parser::Parser;
use crate::syntax::{Node, Token, TokenKind};

pub(crate) fn parse_header(parser: &mut Parser) -> Node {
    let level = match parser.peek(0) {
        Some(Token::Header { level }) => *level,
        _ => 1,
    };
    parser.advance(1);
    Node::Header {
        level,
        children: parser.parse_inline_until(&[TokenKind::NewLine], true),
    }
}

pub(crate) fn parse_code_block(parser: &mut Parser) -> Node {
    let (lang, content) = match parser.peek(0) {
        Some(Token::CodeBlock { lang, content }) => (lang.clone(), content.clone()),
        _ => (String::new(), String::new()),
    };
    parser.advance(1);
    Node::CodeBlock { lang, content }
}

/// A quote marker claims the rest of its line as one quoted paragraph.
pub(crate) fn parse_quote(parser: &mut Parser) -> Node {
    parser.advance(1);
    Node::Quote {
        children: vec![Node::Paragraph {
            children: parser.parse_inline_until(&[TokenKind::NewLine], true),
        }],
    }
}

pub(crate) fn parse_image(parser: &mut Parser) -> Node {
    let (src, alt) = match parser.peek(0) {
        Some(Token::Image { src, alt }) => (src.clone(), alt.clone()),
        _ => (String::new(), String::new()),
    };
    parser.advance(1);
    Node::Image { src, alt }
}

pub(crate) fn parse_horizontal_line(parser: &mut Parser) -> Node {
    parser.advance(1);
    Node::HorizontalLine
}

pub(crate) fn parse_html_block(parser: &mut Parser) -> Node {
    let value = match parser.peek(0) {
        Some(Token::HtmlBlock { value }) => value.clone(),
        _ => String::new(),
    };
    parser.advance(1);
    Node::HtmlBlock { value }
}

/// Definitions register into the resolver and yield no node.
pub(crate) fn parse_footnote_def(parser: &mut Parser) {
    if let Some(Token::FootnoteDef { id, content }) = parser.peek(0) {
        let (id, content) = (id.clone(), content.clone());
        parser.resolver_mut().add_def(id, content);
    }
    parser.advance(1);
}
