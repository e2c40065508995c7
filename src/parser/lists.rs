//! List construction from the flat `ListStart`/`ListEnd` bracket markers.

use crate::parser::Parser;
use crate::syntax::{Node, Token, TokenKind};

pub(crate) fn parse_list(parser: &mut Parser) -> Node {
    let (level, ordered) = match parser.peek(0) {
        Some(Token::ListStart { level, ordered }) => (*level, *ordered),
        _ => (1, false),
    };
    parser.advance(1);

    let mut children = Vec::new();
    while !parser.at_end() {
        match parser.peek(0).map(Token::kind) {
            Some(TokenKind::ListItem) | Some(TokenKind::TaskItem) => {
                children.push(parse_list_item(parser));
            }
            Some(TokenKind::ListEnd) => {
                parser.advance(1);
                break;
            }
            // Anything else ends the list without being consumed.
            _ => break,
        }
    }

    Node::List {
        level,
        ordered,
        children,
    }
}

fn parse_list_item(parser: &mut Parser) -> Node {
    let marker = parser.peek(0).cloned();
    parser.advance(1);

    let mut children = Vec::new();
    while !parser.at_end() {
        let Some(kind) = parser.peek(0).map(Token::kind) else {
            break;
        };
        match kind {
            TokenKind::NewLine => parser.advance(1),
            TokenKind::ListStart => children.push(parse_list(parser)),
            TokenKind::ListItem | TokenKind::TaskItem | TokenKind::ListEnd => break,
            _ => {
                let before = parser.pos();
                children.extend(parser.parse_inline_until(&[TokenKind::NewLine], true));
                if parser.pos() == before {
                    // Stuck on a block boundary; the item ends here.
                    break;
                }
            }
        }
    }

    match marker {
        Some(Token::TaskItem { checked }) => Node::TaskItem { checked, children },
        _ => Node::ListItem { children },
    }
}
