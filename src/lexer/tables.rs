use std::sync::LazyLock;

use regex::Regex;

use crate::lexer::Lexer;
use crate::syntax::{Alignment, Token};

static TABLE_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|.*\|\s*$").expect("valid regex"));

static ALIGN_CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-{3,}:?$").expect("valid regex"));

/// A line that starts and ends with a pipe (ignoring surrounding spaces).
pub(crate) fn is_table_row(line: &str) -> bool {
    TABLE_ROW_RE.is_match(line)
}

/// Tokenize a pipe table. The first line is the header row, the second the
/// alignment row; body rows follow until the first non-pipe-shaped line.
///
/// When the alignment row does not validate, both lines are emitted verbatim
/// as one text token and nothing else is consumed.
pub(crate) fn lex_table(lexer: &mut Lexer) {
    let header = lexer.cursor_mut().read_until('\n', true);
    let align = lexer.cursor_mut().read_until('\n', true);

    let header_cells = split_row(header);
    let align_cells = split_row(align);

    let valid = align_cells.len() == header_cells.len()
        && align_cells.iter().all(|cell| ALIGN_CELL_RE.is_match(cell));
    if !valid {
        log::debug!("invalid table alignment row, degrading to text");
        lexer.push_token(Token::Text {
            value: format!("{header}\n{align}\n"),
        });
        return;
    }

    let aligns: Vec<Alignment> = align_cells.iter().map(|cell| cell_alignment(cell)).collect();

    lexer.push_token(Token::TableStart);
    emit_row(lexer, &header_cells, &aligns, true);

    loop {
        if lexer.cursor().at_end() {
            break;
        }
        let line = lexer.cursor().peek_line();
        let trimmed = line.trim();
        if !(trimmed.starts_with('|') && trimmed.ends_with('|')) {
            break;
        }

        let mut consumed = line.len();
        if lexer.cursor().rest().len() > consumed {
            consumed += 1; // the newline
        }
        lexer.cursor_mut().advance_bytes(consumed);

        let cells = split_row(line);
        emit_row(lexer, &cells, &aligns, false);
    }

    lexer.push_token(Token::TableEnd);
}

/// Emit one row: cell contents are tokenized by a fresh nested lexer over
/// the trimmed cell text, without an end-of-stream marker.
fn emit_row(lexer: &mut Lexer, cells: &[&str], aligns: &[Alignment], is_header: bool) {
    lexer.push_token(Token::RowStart { is_header });
    for (i, cell) in cells.iter().enumerate() {
        lexer.push_token(Token::CellStart {
            align: aligns.get(i).copied().unwrap_or_default(),
        });
        let nested = Lexer::with_rules(cell.trim(), lexer.rules());
        lexer.extend_tokens(nested.tokenize(false));
        lexer.push_token(Token::CellEnd);
    }
    lexer.push_token(Token::RowEnd);
}

/// Split a row on `|` after trimming one leading and one trailing pipe.
/// Cells keep their inner whitespace.
fn split_row(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed.split('|').collect()
}

fn cell_alignment(cell: &str) -> Alignment {
    if cell.starts_with(':') && cell.ends_with(':') {
        Alignment::Center
    } else if cell.ends_with(':') {
        Alignment::Right
    } else {
        Alignment::Left
    }
}
