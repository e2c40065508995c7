//! The default HTML backend.
//!
//! Rendering is a straight recursive walk: children first, concatenate,
//! then dispatch on the node type. User-supplied element overrides win over
//! plugin render rules, which win over the built-ins; unknown node types
//! fall back to their concatenated children.

use std::sync::Arc;

use crate::options::Options;
use crate::plugin::RuleSet;
use crate::resolver::FootnoteResolver;
use crate::syntax::{Alignment, Node, TableRow};

pub struct HtmlRenderer<'a> {
    resolver: &'a FootnoteResolver,
    options: &'a Options,
    rules: Arc<RuleSet>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(resolver: &'a FootnoteResolver, options: &'a Options) -> Self {
        Self::with_rules(resolver, options, Arc::new(RuleSet::default()))
    }

    pub fn with_rules(
        resolver: &'a FootnoteResolver,
        options: &'a Options,
        rules: Arc<RuleSet>,
    ) -> Self {
        Self {
            resolver,
            options,
            rules,
        }
    }

    pub fn options(&self) -> &Options {
        self.options
    }

    /// The footnote store filled during the parse. Reference numbers read
    /// from it are only meaningful after the whole document was parsed.
    pub fn resolver(&self) -> &FootnoteResolver {
        self.resolver
    }

    pub fn render(&self, node: &Node) -> String {
        let children: Vec<String> = node.children().iter().map(|c| self.render(c)).collect();
        let name = node.type_name();

        if let Some(rule) = self.options.override_rule(name) {
            return rule.render(node, &children, self);
        }
        if let Some(rule) = self.rules.render_rule(name) {
            return rule.render(node, &children, self);
        }

        match node {
            Node::Document { .. } => format!("{}{}", children.concat(), self.render_footnotes()),
            Node::Paragraph { .. } => format!("<p>{}</p>", children.concat()),
            Node::Header { level, .. } => {
                let style = if *level <= 2 {
                    " style=\"border-bottom: 1px solid #d1d9e0b3\""
                } else {
                    ""
                };
                format!("<h{level}{style}>{}</h{level}>", children.concat())
            }
            Node::Quote { .. } => format!(
                "<blockquote style=\"margin:0; padding:0 1em; color:#59636e; border-left:.25em solid #d1d9e0;\">{}</blockquote>",
                children.concat()
            ),
            Node::List { ordered, .. } => {
                if *ordered {
                    format!("<ol>{}</ol>", children.concat())
                } else {
                    format!("<ul>{}</ul>", children.concat())
                }
            }
            Node::ListItem { .. } => format!("<li>{}</li>", children.concat()),
            Node::TaskItem { checked, .. } => format!(
                "<li><input type=\"checkbox\" disabled {}>{}</li>",
                if *checked { "checked" } else { "" },
                children.concat()
            ),
            Node::Bold { .. } => format!("<strong>{}</strong>", children.concat()),
            Node::Italic { .. } => format!("<em>{}</em>", children.concat()),
            Node::Strikethrough { .. } => format!("<s>{}</s>", children.concat()),
            Node::InlineCode { content } => format!("<code>{}</code>", escape_html(content)),
            Node::CodeBlock { lang, content } => format!(
                "<pre><code class=\"lang-{lang}\">{}</code></pre>",
                escape_html(content)
            ),
            Node::Link { href, text } => format!("<a href=\"{href}\">{text}</a>"),
            Node::Image { src, alt } => format!("<img src=\"{src}\" alt=\"{alt}\"/>"),
            Node::HorizontalLine => "<hr>".to_string(),
            Node::Text { value } => value.clone(),
            Node::Table { rows } => self.render_table(rows),
            Node::HtmlBlock { value } | Node::HtmlInline { value } => {
                if self.options.allow_dangerous_html {
                    value.clone()
                } else {
                    escape_html(value)
                }
            }
            Node::FootnoteRef { id } => {
                if id.is_empty() {
                    return String::new();
                }
                match self.resolver.ref_index(id) {
                    Some(index) => format!(
                        "<sup id=\"fnref:{index}\"><a href=\"#fn:{index}\" class=\"footnote-ref\">[{index}]</a></sup>"
                    ),
                    None => String::new(),
                }
            }
            Node::Extension { .. } => children.concat(),
        }
    }

    /// The trailing footnote section, in first-use order. Empty unless the
    /// document produced both definitions and references.
    pub fn render_footnotes(&self) -> String {
        if !self.resolver.is_valid() {
            return String::new();
        }
        let items: String = self
            .resolver
            .used_refs()
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let def = self.resolver.get_def(id).unwrap_or_default();
                let index = i + 1;
                format!(
                    "<li id=\"fn:{index}\"><p>{def} <a href=\"#fnref:{index}\" class=\"footnote-backref\">\u{21a9}</a></p></li>"
                )
            })
            .collect();
        format!("<section class=\"footnotes\"><ol>{items}</ol></section>")
    }

    fn render_table(&self, rows: &[TableRow]) -> String {
        let render_row = |row: &TableRow| {
            let tag = if row.is_header { "th" } else { "td" };
            let cells: String = row
                .cells
                .iter()
                .map(|cell| {
                    let body: String = cell.children.iter().map(|c| self.render(c)).collect();
                    format!(
                        "<{tag} style=\"text-align:{}\">{body}</{tag}>",
                        align_name(cell.align)
                    )
                })
                .collect();
            format!("<tr>{cells}</tr>")
        };

        let head: String = rows
            .iter()
            .filter(|row| row.is_header)
            .map(render_row)
            .collect();
        let body: String = rows
            .iter()
            .filter(|row| !row.is_header)
            .map(render_row)
            .collect();

        let thead = if rows.iter().any(|row| row.is_header) {
            format!("<thead>{head}</thead>")
        } else {
            String::new()
        };
        let tbody = if rows.iter().any(|row| !row.is_header) {
            format!("<tbody>{body}</tbody>")
        } else {
            String::new()
        };
        format!("<table>{thead}{tbody}</table>")
    }
}

/// The CSS `text-align` keyword for a table column's alignment.
fn align_name(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

/// Minimal HTML escaping for text that lands in markup positions.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_order() {
        assert_eq!(escape_html("&<>"), "&amp;&lt;&gt;");
        assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
    }

    #[test]
    fn test_leaf_rendering() {
        let resolver = FootnoteResolver::new();
        let options = Options::default();
        let renderer = HtmlRenderer::new(&resolver, &options);

        assert_eq!(
            renderer.render(&Node::InlineCode {
                content: "a<b".to_string()
            }),
            "<code>a&lt;b</code>"
        );
        assert_eq!(renderer.render(&Node::HorizontalLine), "<hr>");
        assert_eq!(
            renderer.render(&Node::Image {
                src: "x.png".to_string(),
                alt: "x".to_string()
            }),
            "<img src=\"x.png\" alt=\"x\"/>"
        );
    }

    #[test]
    fn test_html_escaped_by_default() {
        let resolver = FootnoteResolver::new();
        let options = Options::default();
        let renderer = HtmlRenderer::new(&resolver, &options);
        let node = Node::HtmlBlock {
            value: "<div>x</div>".to_string(),
        };
        assert_eq!(renderer.render(&node), "&lt;div&gt;x&lt;/div&gt;");

        let dangerous = Options::builder().allow_dangerous_html(true).build();
        let renderer = HtmlRenderer::new(&resolver, &dangerous);
        assert_eq!(renderer.render(&node), "<div>x</div>");
    }

    #[test]
    fn test_footnote_section_requires_validity() {
        let mut resolver = FootnoteResolver::new();
        resolver.add_used_ref("a");
        let options = Options::default();
        let renderer = HtmlRenderer::new(&resolver, &options);
        assert_eq!(renderer.render_footnotes(), "");

        resolver.add_def("a", "note");
        let renderer = HtmlRenderer::new(&resolver, &options);
        assert_eq!(
            renderer.render_footnotes(),
            "<section class=\"footnotes\"><ol><li id=\"fn:1\"><p>note <a href=\"#fnref:1\" class=\"footnote-backref\">\u{21a9}</a></p></li></ol></section>"
        );
    }
}
