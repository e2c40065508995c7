use serde::Serialize;

use super::Alignment;

/// One row of a [`Node::Table`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub is_header: bool,
    pub cells: Vec<TableCell>,
}

/// One cell of a [`TableRow`]. Cell contents are inline nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub align: Alignment,
    pub children: Vec<Node>,
}

/// An element of the parsed tree.
///
/// Containers own their children; leaves carry scalar payloads. The
/// serialized form tags every node with a `type` discriminator, and
/// consumers are expected to tolerate node types they do not know
/// (plugins add their own through [`Node::Extension`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Document { children: Vec<Node> },
    Paragraph { children: Vec<Node> },
    Header { level: u8, children: Vec<Node> },
    Bold { children: Vec<Node> },
    Italic { children: Vec<Node> },
    Strikethrough { children: Vec<Node> },
    Quote { children: Vec<Node> },
    List { level: usize, ordered: bool, children: Vec<Node> },
    ListItem { children: Vec<Node> },
    TaskItem { checked: bool, children: Vec<Node> },
    Table { rows: Vec<TableRow> },
    CodeBlock { lang: String, content: String },
    InlineCode { content: String },
    Link { href: String, text: String },
    Image { src: String, alt: String },
    HtmlBlock { value: String },
    HtmlInline { value: String },
    FootnoteRef { id: String },
    HorizontalLine,
    Text { value: String },
    /// A plugin-defined node. Renders as its concatenated children unless a
    /// render rule is registered for `name`.
    Extension {
        name: String,
        data: serde_json::Value,
        children: Vec<Node>,
    },
}

impl Node {
    /// The type name used for render dispatch and overrides.
    pub fn type_name(&self) -> &str {
        match self {
            Node::Document { .. } => "Document",
            Node::Paragraph { .. } => "Paragraph",
            Node::Header { .. } => "Header",
            Node::Bold { .. } => "Bold",
            Node::Italic { .. } => "Italic",
            Node::Strikethrough { .. } => "Strikethrough",
            Node::Quote { .. } => "Quote",
            Node::List { .. } => "List",
            Node::ListItem { .. } => "ListItem",
            Node::TaskItem { .. } => "TaskItem",
            Node::Table { .. } => "Table",
            Node::CodeBlock { .. } => "CodeBlock",
            Node::InlineCode { .. } => "InlineCode",
            Node::Link { .. } => "Link",
            Node::Image { .. } => "Image",
            Node::HtmlBlock { .. } => "HtmlBlock",
            Node::HtmlInline { .. } => "HtmlInline",
            Node::FootnoteRef { .. } => "FootnoteRef",
            Node::HorizontalLine => "HorizontalLine",
            Node::Text { .. } => "Text",
            Node::Extension { name, .. } => name.as_str(),
        }
    }

    /// Child nodes for containers; empty for leaves. Table contents hang
    /// off [`TableRow`]s instead and are not reachable through this.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children }
            | Node::Paragraph { children }
            | Node::Header { children, .. }
            | Node::Bold { children }
            | Node::Italic { children }
            | Node::Strikethrough { children }
            | Node::Quote { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::TaskItem { children, .. }
            | Node::Extension { children, .. } => children,
            _ => &[],
        }
    }
}
