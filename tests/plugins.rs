//! Plugin round-trip: a custom construct flowing through all three stages.

use plume::{
    Converter, HtmlRenderer, Lexer, Node, Options, Parser, ParserRule, Plugin, PluginKind, Token,
    TokenizerRule,
};

/// `==text==` highlight spans.
struct HighlightTokenizer;

impl TokenizerRule for HighlightTokenizer {
    fn matches(&self, lexer: &Lexer) -> bool {
        lexer.cursor().starts_with("==")
    }

    fn emit(&self, lexer: &mut Lexer) {
        let cursor = lexer.cursor_mut();
        cursor.advance(2);
        let content = cursor.read_until_literal("==", true).to_string();
        lexer.push_token(Token::Extension {
            name: "Highlight".to_string(),
            data: serde_json::json!({ "value": content }),
        });
    }
}

struct HighlightParser;

impl ParserRule for HighlightParser {
    fn execute(&self, parser: &mut Parser, token: &Token) -> Vec<Node> {
        parser.advance(1);
        let Token::Extension { name, data } = token else {
            return Vec::new();
        };
        vec![Node::Extension {
            name: name.clone(),
            data: data.clone(),
            children: Vec::new(),
        }]
    }
}

struct HighlightRenderer;

impl plume::RenderRule for HighlightRenderer {
    fn render(&self, node: &Node, _children: &[String], _renderer: &HtmlRenderer) -> String {
        let Node::Extension { data, .. } = node else {
            return String::new();
        };
        format!("<mark>{}</mark>", data["value"].as_str().unwrap_or_default())
    }
}

fn highlight_plugin() -> Plugin {
    Plugin::new(
        "Highlight",
        PluginKind::Inline,
        HighlightTokenizer,
        HighlightParser,
    )
    .with_renderer(HighlightRenderer)
}

#[test]
fn custom_inline_construct_round_trips() {
    let converter = Converter::with_plugins(Options::default(), vec![highlight_plugin()]);
    assert_eq!(
        converter.to_html("note ==this== please"),
        "<p>note <mark>this</mark> please</p>"
    );
}

#[test]
fn plugin_tokenizer_runs_before_built_in_rules() {
    // Without the plugin, `==x==` is plain text.
    assert_eq!(plume::to_html("==x=="), "<p>==x==</p>");

    let converter = Converter::with_plugins(Options::default(), vec![highlight_plugin()]);
    assert_eq!(converter.to_html("==x=="), "<p><mark>x</mark></p>");
}

#[test]
fn plugin_nodes_without_render_rule_fall_back_to_children() {
    let plugin = Plugin::new(
        "Highlight",
        PluginKind::Inline,
        HighlightTokenizer,
        HighlightParser,
    );
    let converter = Converter::with_plugins(Options::default(), vec![plugin]);
    // An extension node with no children and no render rule contributes
    // nothing to the output.
    assert_eq!(converter.to_html("a ==x== b"), "<p>a  b</p>");
}

#[test]
fn plugin_rules_work_inside_table_cells() {
    let converter = Converter::with_plugins(Options::default(), vec![highlight_plugin()]);
    let html = converter.to_html("|h|\n|---|\n|==x==|");
    assert!(html.contains("<mark>x</mark>"), "got: {html}");
}

#[test]
fn plugin_can_shadow_a_built_in_type() {
    struct QuietBoldParser;
    impl ParserRule for QuietBoldParser {
        fn execute(&self, parser: &mut Parser, _token: &Token) -> Vec<Node> {
            // Consume the opening marker and return the span's contents
            // without a wrapping node.
            parser.advance(1);
            parser.parse_inline_until(&[plume::TokenKind::Bold], true)
        }
    }
    struct NeverTokenizer;
    impl TokenizerRule for NeverTokenizer {
        fn matches(&self, _lexer: &Lexer) -> bool {
            false
        }
        fn emit(&self, _lexer: &mut Lexer) {}
    }

    let plugin = Plugin::new("Bold", PluginKind::Inline, NeverTokenizer, QuietBoldParser);
    let converter = Converter::with_plugins(Options::default(), vec![plugin]);
    assert_eq!(converter.to_html("a **b** c"), "<p>a b c</p>");
}
