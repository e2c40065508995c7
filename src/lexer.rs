//! The tokenizing state machine.
//!
//! The lexer drives an ordered rule table over a [`Cursor`]: the first rule
//! that matches the current position consumes its construct and appends
//! tokens; when nothing matches, the current character folds into a trailing
//! text token. Every rule consumes exactly the characters of the construct
//! it reports — the driver never advances on a rule's behalf.

use std::sync::Arc;

use crate::cursor::Cursor;
use crate::plugin::RuleSet;
use crate::syntax::Token;

mod breaks;
mod code_blocks;
mod code_spans;
mod escapes;
mod footnotes;
mod headings;
mod html;
mod links;
mod lists;
mod tables;

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
    list_depth: usize,
    rules: Arc<RuleSet>,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src str) -> Self {
        Self::with_rules(input, Arc::new(RuleSet::default()))
    }

    /// A lexer with plugin tokenizer rules. The rule set is shared, not
    /// copied; nested cell lexers reuse the same handle.
    pub fn with_rules(input: &'src str, rules: Arc<RuleSet>) -> Self {
        Self {
            cursor: Cursor::new(input),
            tokens: Vec::new(),
            list_depth: 0,
            rules,
        }
    }

    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'src> {
        &mut self.cursor
    }

    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Number of currently open lists.
    pub fn list_depth(&self) -> usize {
        self.list_depth
    }

    pub fn push_token(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Fold text into the trailing text token, starting one if needed.
    pub fn push_text(&mut self, text: &str) {
        if let Some(Token::Text { value }) = self.tokens.last_mut() {
            value.push_str(text);
        } else {
            self.tokens.push(Token::Text {
                value: text.to_string(),
            });
        }
    }

    fn push_char(&mut self, ch: char) {
        if let Some(Token::Text { value }) = self.tokens.last_mut() {
            value.push(ch);
        } else {
            self.tokens.push(Token::Text {
                value: ch.to_string(),
            });
        }
    }

    pub(crate) fn open_list(&mut self, ordered: bool) {
        self.list_depth += 1;
        self.tokens.push(Token::ListStart {
            level: self.list_depth,
            ordered,
        });
    }

    pub(crate) fn close_list(&mut self) {
        self.list_depth = self.list_depth.saturating_sub(1);
        self.tokens.push(Token::ListEnd);
    }

    pub(crate) fn rules(&self) -> Arc<RuleSet> {
        Arc::clone(&self.rules)
    }

    pub(crate) fn extend_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens.extend(tokens);
    }

    /// Run the rule table to the end of the input. With `insert_end`, a
    /// single end-of-stream marker is appended after any still-open lists
    /// are closed; nested table-cell tokenization passes `false`.
    pub fn tokenize(mut self, insert_end: bool) -> Vec<Token> {
        while !self.cursor.at_end() {
            if self.try_extension_rules() {
                continue;
            }
            self.step();
        }

        while self.list_depth > 0 {
            self.close_list();
        }

        if insert_end {
            self.tokens.push(Token::Eof);
        }
        self.tokens
    }

    /// Plugin tokenizer rules run before the built-in table, in
    /// registration order.
    fn try_extension_rules(&mut self) -> bool {
        if self.rules.tokenizer_rules().is_empty() {
            return false;
        }
        let rules = Arc::clone(&self.rules);
        for rule in rules.tokenizer_rules() {
            if rule.matches(self) {
                let before = self.cursor.pos();
                rule.emit(self);
                if self.cursor.pos() == before {
                    // A rule that consumes nothing would stall the loop;
                    // fall through to the built-in table instead.
                    log::warn!("extension tokenizer rule matched but consumed no input");
                    return false;
                }
                return true;
            }
        }
        false
    }

    fn step(&mut self) {
        let rest = self.cursor.rest();

        // Backslash escape: the next character is forced into plain text.
        if let Some((len, ch)) = escapes::try_parse_escape(rest) {
            self.push_char(ch);
            self.cursor.advance_bytes(len);
            return;
        }

        if html::lex_comment(self) {
            return;
        }

        if html::lex_html(self) {
            return;
        }

        // A thematic break is only recognized directly after a newline
        // token, so the very first line of the document never matches.
        if matches!(self.tokens.last(), Some(Token::NewLine))
            && breaks::is_thematic_break(self.cursor.peek_line())
        {
            let len = self.cursor.peek_line().len();
            self.push_token(Token::HorizontalLine);
            self.cursor.advance_bytes(len);
            return;
        }

        if rest.starts_with("```")
            && let Some(block) = code_blocks::try_parse_fenced(rest)
        {
            self.push_token(Token::CodeBlock {
                lang: block.lang,
                content: block.content,
            });
            self.cursor.advance_bytes(block.len);
            return;
        }

        if rest.starts_with("**") {
            self.push_token(Token::Bold);
            self.cursor.advance_bytes(2);
            return;
        }

        if rest.starts_with("~~") {
            self.push_token(Token::Strikethrough);
            self.cursor.advance_bytes(2);
            return;
        }

        if self.cursor.at_line_start()
            && let Some((id, content)) = footnotes::try_parse_definition(self.cursor.peek_line())
        {
            // The definition owns its whole line, newline included; no
            // newline token is emitted for it.
            let mut len = self.cursor.peek_line().len();
            if self.cursor.rest().len() > len {
                len += 1;
            }
            self.push_token(Token::FootnoteDef { id, content });
            self.cursor.advance_bytes(len);
            return;
        }

        if rest.starts_with("[^")
            && let Some((len, id)) = footnotes::try_parse_reference(rest)
        {
            self.push_token(Token::FootnoteRef { id });
            self.cursor.advance_bytes(len);
            return;
        }

        if self.cursor.at_line_start() {
            if lists::lex_task_item(self) {
                return;
            }
            if lists::lex_unordered_item(self) {
                return;
            }
            if lists::lex_ordered_item(self) {
                return;
            }
            if self.list_depth > 0 && !lists::is_any_item(self.cursor.peek_line()) {
                log::trace!("closing {} open list(s)", self.list_depth);
                while self.list_depth > 0 {
                    self.close_list();
                }
                return;
            }
            if tables::is_table_row(self.cursor.peek_line()) {
                tables::lex_table(self);
                return;
            }
        }

        if rest.starts_with('`')
            && let Some((len, content)) = code_spans::try_parse_code_span(rest)
        {
            self.push_token(Token::InlineCode { content });
            self.cursor.advance_bytes(len);
            return;
        }

        if let Some(heading) = headings::try_parse_heading(rest) {
            match heading {
                headings::HeadingMatch::Heading { len, level } => {
                    self.push_token(Token::Header { level });
                    self.cursor.advance_bytes(len);
                }
                headings::HeadingMatch::Literal { len } => {
                    self.push_text(&rest[..len]);
                    self.cursor.advance_bytes(len);
                }
            }
            return;
        }

        if rest.starts_with('*') || rest.starts_with('_') {
            self.push_token(Token::Italic);
            self.cursor.advance_bytes(1);
            return;
        }

        if rest.starts_with('>') {
            self.push_token(Token::Quote);
            self.cursor.advance_bytes(1);
            return;
        }

        if rest.starts_with("![")
            && let Some(image) = links::try_parse_image(rest)
        {
            match image {
                links::LinkMatch::Link { len, text, href } => {
                    self.push_token(Token::Image {
                        alt: text,
                        src: href,
                    });
                    self.cursor.advance_bytes(len);
                }
                links::LinkMatch::Literal { len, text } => {
                    self.push_text(&format!("![{text}]"));
                    self.cursor.advance_bytes(len);
                }
            }
            return;
        }

        if rest.starts_with('[')
            && let Some(link) = links::try_parse_link(rest)
        {
            match link {
                links::LinkMatch::Link { len, text, href } => {
                    self.push_token(Token::Link { text, href });
                    self.cursor.advance_bytes(len);
                }
                links::LinkMatch::Literal { len, text } => {
                    self.push_text(&format!("[{text}]"));
                    self.cursor.advance_bytes(len);
                }
            }
            return;
        }

        if rest.starts_with('\n') {
            self.push_token(Token::NewLine);
            self.cursor.advance_bytes(1);
            return;
        }

        // Nothing matched: fold one character into trailing text.
        if let Some(ch) = self.cursor.peek(0) {
            self.push_char(ch);
            self.cursor.advance(1);
        }
    }
}
