//! Table construction from the `TableStart`…`TableEnd` bracket markers.

use crate::parser::Parser;
use crate::syntax::{Alignment, Node, TableCell, TableRow, Token, TokenKind};

pub(crate) fn parse_table(parser: &mut Parser) -> Node {
    parser.advance(1); // TableStart

    let mut rows = Vec::new();
    while !parser.at_end() {
        match parser.peek(0).map(Token::kind) {
            Some(TokenKind::RowStart) => rows.push(parse_row(parser)),
            Some(TokenKind::TableEnd) => {
                parser.advance(1);
                break;
            }
            _ => {
                // A well-formed stream wraps a whole number of rows; skip
                // anything that ended up between them.
                log::warn!("unexpected token between table rows");
                parser.advance(1);
            }
        }
    }

    Node::Table { rows }
}

fn parse_row(parser: &mut Parser) -> TableRow {
    let is_header = match parser.peek(0) {
        Some(Token::RowStart { is_header }) => *is_header,
        _ => false,
    };
    parser.advance(1);

    let mut cells = Vec::new();
    while !parser.at_end() {
        match parser.peek(0) {
            Some(Token::CellStart { align }) => {
                let align = *align;
                cells.push(parse_cell(parser, align));
            }
            Some(Token::RowEnd) => {
                parser.advance(1);
                break;
            }
            Some(_) => parser.advance(1),
            None => break,
        }
    }

    TableRow { is_header, cells }
}

fn parse_cell(parser: &mut Parser, align: Alignment) -> TableCell {
    parser.advance(1); // CellStart
    TableCell {
        align,
        children: parser.parse_inline_until(&[TokenKind::CellEnd], true),
    }
}
