//! plume converts Markdown text into a typed syntax tree and, through the
//! default backend, into HTML.
//!
//! The pipeline has two stages plus one shared side channel: a [`Lexer`]
//! turns the source into a flat token stream, a [`Parser`] turns the tokens
//! into a tree rooted at a `Document` node, and a [`FootnoteResolver`]
//! carries footnote definitions and first-use order from the parse into
//! rendering. Custom syntax plugs in at construction time through
//! [`Plugin`] rule triples.
//!
//! ```rust
//! let html = plume::to_html("Hello **world**");
//! assert_eq!(html, "<p>Hello <strong>world</strong></p>");
//! ```

use std::sync::Arc;

pub mod cursor;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod plugin;
pub mod render;
pub mod resolver;
pub mod syntax;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use options::{Options, OptionsBuilder};
pub use parser::Parser;
pub use plugin::{ParserRule, Plugin, PluginKind, RenderRule, RuleSet, TokenizerRule};
pub use render::HtmlRenderer;
pub use resolver::FootnoteResolver;
pub use syntax::{Alignment, Node, TableCell, TableRow, Token, TokenKind};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a Markdown string into its document tree.
pub fn parse(input: &str) -> Node {
    Converter::default().parse(input).document
}

/// Convert a Markdown string to HTML with default options and no plugins.
pub fn to_html(input: &str) -> String {
    Converter::default().to_html(input)
}

/// A parse result: the tree plus the footnote store a renderer needs to
/// number references and build the trailing footnote section.
#[derive(Debug)]
pub struct Parsed {
    pub document: Node,
    pub footnotes: FootnoteResolver,
}

/// A reusable conversion pipeline.
///
/// Rule tables are compiled once from the plugin list and shared across
/// calls; lexer, parser, and resolver state is created fresh for every
/// conversion, so one converter can serve any number of sequential calls.
pub struct Converter {
    rules: Arc<RuleSet>,
    options: Options,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Converter {
    pub fn new(options: Options) -> Self {
        Self {
            rules: Arc::new(RuleSet::default()),
            options,
        }
    }

    pub fn with_plugins(options: Options, plugins: Vec<Plugin>) -> Self {
        Self {
            rules: Arc::new(RuleSet::from_plugins(plugins)),
            options,
        }
    }

    /// Tokenize and parse `input`. Line endings are normalized to `\n`
    /// first.
    pub fn parse(&self, input: &str) -> Parsed {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        let normalized = input.replace("\r\n", "\n");
        let tokens = Lexer::with_rules(&normalized, Arc::clone(&self.rules)).tokenize(true);
        log::debug!("tokenized {} tokens from {} bytes", tokens.len(), input.len());

        let mut footnotes = FootnoteResolver::new();
        let document = Parser::with_rules(tokens, &mut footnotes, Arc::clone(&self.rules)).parse();
        Parsed {
            document,
            footnotes,
        }
    }

    /// Run the full pipeline down to an HTML string.
    pub fn to_html(&self, input: &str) -> String {
        let parsed = self.parse(input);
        HtmlRenderer::with_rules(&parsed.footnotes, &self.options, Arc::clone(&self.rules))
            .render(&parsed.document)
    }
}
