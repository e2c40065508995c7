//! Construction-time extension points.
//!
//! A plugin contributes one syntax construct end to end: a tokenizer rule
//! that recognizes and consumes it, a parser rule that turns its tokens into
//! nodes, and optionally a render rule for the HTML backend. Rules are
//! compiled into a [`RuleSet`] once, before the first conversion; after that
//! the set is immutable and shared by every lexer, parser, and renderer a
//! converter creates.

use std::collections::HashMap;
use std::sync::Arc;

use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::render::HtmlRenderer;
use crate::syntax::{Node, Token};

/// Whether a plugin's parser rule joins the block or the inline strategy
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    Block,
    Inline,
}

/// A tokenizer rule. Rules supplied by plugins are tried before the
/// built-in rule table, in registration order.
pub trait TokenizerRule: Send + Sync {
    fn matches(&self, lexer: &Lexer) -> bool;

    /// Consume the matched construct and append its tokens. The rule must
    /// advance the cursor by at least one character; a rule that consumes
    /// nothing is skipped to keep the tokenize loop moving.
    fn emit(&self, lexer: &mut Lexer);
}

/// A parser strategy keyed by token type name. Reusing a built-in name
/// shadows the built-in strategy in the chosen table.
pub trait ParserRule: Send + Sync {
    /// Consume at least the current token and return the produced nodes
    /// (empty for side-effect-only rules).
    fn execute(&self, parser: &mut Parser, token: &Token) -> Vec<Node>;
}

/// A render strategy keyed by node type name.
pub trait RenderRule: Send + Sync {
    /// `children` holds the already-rendered output of the node's children.
    fn render(&self, node: &Node, children: &[String], renderer: &HtmlRenderer) -> String;
}

impl<F> RenderRule for F
where
    F: Fn(&Node, &[String], &HtmlRenderer) -> String + Send + Sync,
{
    fn render(&self, node: &Node, children: &[String], renderer: &HtmlRenderer) -> String {
        self(node, children, renderer)
    }
}

/// One custom syntax construct.
pub struct Plugin {
    name: String,
    kind: PluginKind,
    tokenizer: Arc<dyn TokenizerRule>,
    parser: Arc<dyn ParserRule>,
    renderer: Option<Arc<dyn RenderRule>>,
}

impl Plugin {
    pub fn new(
        name: impl Into<String>,
        kind: PluginKind,
        tokenizer: impl TokenizerRule + 'static,
        parser: impl ParserRule + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            tokenizer: Arc::new(tokenizer),
            parser: Arc::new(parser),
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: impl RenderRule + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PluginKind {
        self.kind
    }
}

/// Rule tables compiled from a plugin list at construction time.
///
/// Two plugins (or a plugin and a built-in) declaring the same type name
/// silently overwrite one another in the registration maps; validating
/// exclusivity is the integrator's job.
#[derive(Default)]
pub struct RuleSet {
    tokenizers: Vec<Arc<dyn TokenizerRule>>,
    block: HashMap<String, Arc<dyn ParserRule>>,
    inline: HashMap<String, Arc<dyn ParserRule>>,
    renderers: HashMap<String, Arc<dyn RenderRule>>,
}

impl RuleSet {
    pub fn from_plugins(plugins: Vec<Plugin>) -> Self {
        let mut set = RuleSet::default();
        for plugin in plugins {
            log::debug!("registering {:?} plugin rule {:?}", plugin.kind, plugin.name);
            set.tokenizers.push(plugin.tokenizer);
            let table = match plugin.kind {
                PluginKind::Block => &mut set.block,
                PluginKind::Inline => &mut set.inline,
            };
            table.insert(plugin.name.clone(), plugin.parser);
            if let Some(renderer) = plugin.renderer {
                set.renderers.insert(plugin.name, renderer);
            }
        }
        set
    }

    pub(crate) fn tokenizer_rules(&self) -> &[Arc<dyn TokenizerRule>] {
        &self.tokenizers
    }

    pub(crate) fn block_rule(&self, name: &str) -> Option<Arc<dyn ParserRule>> {
        self.block.get(name).cloned()
    }

    pub(crate) fn inline_rule(&self, name: &str) -> Option<Arc<dyn ParserRule>> {
        self.inline.get(name).cloned()
    }

    pub(crate) fn render_rule(&self, name: &str) -> Option<&Arc<dyn RenderRule>> {
        self.renderers.get(name)
    }
}
