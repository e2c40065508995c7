//! Token-to-tree construction.
//!
//! The parser walks the flat token stream with two strategy tables: block
//! strategies open structural units (headers, lists, tables, …) and inline
//! strategies run inside a line of text (emphasis, links, code spans, …).
//! Built-in strategies dispatch on the closed token enum; plugin rules live
//! in a string-keyed side table consulted first, so a plugin can shadow a
//! built-in type by reusing its name.

use std::sync::Arc;

use crate::plugin::RuleSet;
use crate::resolver::FootnoteResolver;
use crate::syntax::{Node, Token, TokenKind};

mod blocks;
mod inlines;
mod lists;
mod tables;

/// Token types that open a new structural unit. An inline run always ends
/// (without consuming) when one of these comes up, even without a newline.
const BLOCK_KINDS: [TokenKind; 10] = [
    TokenKind::Header,
    TokenKind::CodeBlock,
    TokenKind::Quote,
    TokenKind::Image,
    TokenKind::HorizontalLine,
    TokenKind::ListStart,
    TokenKind::TableStart,
    TokenKind::HtmlBlock,
    TokenKind::FootnoteDef,
    TokenKind::NewLine,
];

/// Closing/continuation bracket markers. These can never be inline content;
/// an inline run ends before them and leaves them for whichever structural
/// parser owns them.
const STRUCTURAL_KINDS: [TokenKind; 8] = [
    TokenKind::ListItem,
    TokenKind::TaskItem,
    TokenKind::ListEnd,
    TokenKind::TableEnd,
    TokenKind::RowStart,
    TokenKind::RowEnd,
    TokenKind::CellStart,
    TokenKind::CellEnd,
];

pub struct Parser<'r> {
    tokens: Vec<Token>,
    pos: usize,
    resolver: &'r mut FootnoteResolver,
    rules: Arc<RuleSet>,
}

impl<'r> Parser<'r> {
    pub fn new(tokens: Vec<Token>, resolver: &'r mut FootnoteResolver) -> Self {
        Self::with_rules(tokens, resolver, Arc::new(RuleSet::default()))
    }

    /// A parser with plugin strategy rules registered.
    pub fn with_rules(
        tokens: Vec<Token>,
        resolver: &'r mut FootnoteResolver,
        rules: Arc<RuleSet>,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            resolver,
            rules,
        }
    }

    /// Build the tree. The root is always a `Document`, whatever the input
    /// stream looked like.
    pub fn parse(mut self) -> Node {
        Node::Document {
            children: self.parse_blocks(),
        }
    }

    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True at the end-of-stream marker or past the last token.
    pub fn at_end(&self) -> bool {
        matches!(self.peek(0), None | Some(Token::Eof))
    }

    /// The footnote store this parser writes definitions and reference
    /// order into.
    pub fn resolver_mut(&mut self) -> &mut FootnoteResolver {
        self.resolver
    }

    pub fn parse_blocks(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();

        while !self.at_end() {
            let Some(token) = self.peek(0) else { break };
            log::trace!("block dispatch at {}: {}", self.pos, token.type_name());

            if let Some(rule) = self.rules.block_rule(token.type_name()) {
                let token = token.clone();
                let before = self.pos;
                nodes.extend(rule.execute(self, &token));
                if self.pos == before {
                    self.advance(1);
                }
                continue;
            }

            match token.kind() {
                TokenKind::Header => nodes.push(blocks::parse_header(self)),
                TokenKind::CodeBlock => nodes.push(blocks::parse_code_block(self)),
                TokenKind::Quote => nodes.push(blocks::parse_quote(self)),
                TokenKind::Image => nodes.push(blocks::parse_image(self)),
                TokenKind::HorizontalLine => nodes.push(blocks::parse_horizontal_line(self)),
                TokenKind::ListStart => nodes.push(lists::parse_list(self)),
                TokenKind::TableStart => nodes.push(tables::parse_table(self)),
                TokenKind::HtmlBlock => nodes.push(blocks::parse_html_block(self)),
                TokenKind::FootnoteDef => blocks::parse_footnote_def(self),
                TokenKind::NewLine => self.advance(1),
                _ => {
                    // Paragraph fallback. An empty run still has to make
                    // progress so the loop terminates.
                    let before = self.pos;
                    let children = self.parse_inline_until(&[TokenKind::NewLine], true);
                    if !children.is_empty() {
                        nodes.push(Node::Paragraph { children });
                    } else if self.pos == before {
                        self.advance(1);
                    }
                }
            }
        }

        nodes
    }

    /// Consume tokens as inline content until a stop type, a block-strategy
    /// type, or the end of the stream. Stop tokens are not consumed unless
    /// `consume_stop` is set; block boundaries never are.
    pub fn parse_inline_until(&mut self, stop: &[TokenKind], consume_stop: bool) -> Vec<Node> {
        let mut nodes = Vec::new();

        while !self.at_end() {
            let Some(token) = self.peek(0) else { break };
            let kind = token.kind();

            if stop.contains(&kind) {
                if consume_stop {
                    self.advance(1);
                }
                break;
            }
            if STRUCTURAL_KINDS.contains(&kind) || self.is_block_token(token) {
                break;
            }

            if let Some(rule) = self.rules.inline_rule(token.type_name()) {
                let token = token.clone();
                let before = self.pos;
                nodes.extend(rule.execute(self, &token));
                if self.pos == before {
                    self.advance(1);
                }
                continue;
            }

            match kind {
                TokenKind::Bold => nodes.push(inlines::parse_bold(self)),
                TokenKind::Italic => nodes.push(inlines::parse_italic(self)),
                TokenKind::Strikethrough => nodes.push(inlines::parse_strikethrough(self)),
                TokenKind::InlineCode => nodes.push(inlines::parse_inline_code(self)),
                TokenKind::Link => nodes.push(inlines::parse_link(self)),
                TokenKind::HtmlInline => nodes.push(inlines::parse_html_inline(self)),
                TokenKind::FootnoteRef => nodes.push(inlines::parse_footnote_ref(self)),
                _ => {
                    // Anything else becomes literal text.
                    let value = token.text_value().unwrap_or_default().to_string();
                    self.advance(1);
                    nodes.push(Node::Text { value });
                }
            }
        }

        nodes
    }

    fn is_block_token(&self, token: &Token) -> bool {
        BLOCK_KINDS.contains(&token.kind())
            || self.rules.block_rule(token.type_name()).is_some()
    }
}
