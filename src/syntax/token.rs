use serde::Serialize;

/// Horizontal alignment of a table column, taken from the separator row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A lexical unit produced by the [`Lexer`](crate::lexer::Lexer).
///
/// The token stream is flat: list and table structure is expressed with
/// matched bracket markers (`ListStart`/`ListEnd`, `TableStart`/`RowStart`/
/// `CellStart`/`CellEnd`/`RowEnd`/`TableEnd`), not with nesting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Token {
    Text { value: String },
    NewLine,
    Header { level: u8 },
    Bold,
    Italic,
    Strikethrough,
    Quote,
    HorizontalLine,
    CodeBlock { lang: String, content: String },
    InlineCode { content: String },
    Link { text: String, href: String },
    Image { alt: String, src: String },
    HtmlBlock { value: String },
    HtmlInline { value: String },
    FootnoteDef { id: String, content: String },
    FootnoteRef { id: String },
    ListStart { level: usize, ordered: bool },
    ListEnd,
    ListItem,
    TaskItem { checked: bool },
    TableStart,
    TableEnd,
    RowStart { is_header: bool },
    RowEnd,
    CellStart { align: Alignment },
    CellEnd,
    /// End-of-stream marker. Emitted exactly once per top-level tokenize
    /// call; nested table-cell tokenization omits it.
    Eof,
    /// A plugin-defined token. `name` keys the parser rule that consumes it.
    Extension {
        name: String,
        data: serde_json::Value,
    },
}

/// Fieldless discriminator for [`Token`], used for strategy dispatch and
/// stop-token sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    NewLine,
    Header,
    Bold,
    Italic,
    Strikethrough,
    Quote,
    HorizontalLine,
    CodeBlock,
    InlineCode,
    Link,
    Image,
    HtmlBlock,
    HtmlInline,
    FootnoteDef,
    FootnoteRef,
    ListStart,
    ListEnd,
    ListItem,
    TaskItem,
    TableStart,
    TableEnd,
    RowStart,
    RowEnd,
    CellStart,
    CellEnd,
    Eof,
    Extension,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Text { .. } => TokenKind::Text,
            Token::NewLine => TokenKind::NewLine,
            Token::Header { .. } => TokenKind::Header,
            Token::Bold => TokenKind::Bold,
            Token::Italic => TokenKind::Italic,
            Token::Strikethrough => TokenKind::Strikethrough,
            Token::Quote => TokenKind::Quote,
            Token::HorizontalLine => TokenKind::HorizontalLine,
            Token::CodeBlock { .. } => TokenKind::CodeBlock,
            Token::InlineCode { .. } => TokenKind::InlineCode,
            Token::Link { .. } => TokenKind::Link,
            Token::Image { .. } => TokenKind::Image,
            Token::HtmlBlock { .. } => TokenKind::HtmlBlock,
            Token::HtmlInline { .. } => TokenKind::HtmlInline,
            Token::FootnoteDef { .. } => TokenKind::FootnoteDef,
            Token::FootnoteRef { .. } => TokenKind::FootnoteRef,
            Token::ListStart { .. } => TokenKind::ListStart,
            Token::ListEnd => TokenKind::ListEnd,
            Token::ListItem => TokenKind::ListItem,
            Token::TaskItem { .. } => TokenKind::TaskItem,
            Token::TableStart => TokenKind::TableStart,
            Token::TableEnd => TokenKind::TableEnd,
            Token::RowStart { .. } => TokenKind::RowStart,
            Token::RowEnd => TokenKind::RowEnd,
            Token::CellStart { .. } => TokenKind::CellStart,
            Token::CellEnd => TokenKind::CellEnd,
            Token::Eof => TokenKind::Eof,
            Token::Extension { .. } => TokenKind::Extension,
        }
    }

    /// The type name used for rule registration and overrides. Built-in
    /// tokens use their variant name; extension tokens use their own name.
    pub fn type_name(&self) -> &str {
        match self {
            Token::Extension { name, .. } => name.as_str(),
            _ => self.kind().name(),
        }
    }

    /// Text payload for tokens that carry one. The parser's inline fallback
    /// turns any unhandled token into a text node through this accessor.
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Token::Text { value } => Some(value.as_str()),
            _ => None,
        }
    }
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::NewLine => "NewLine",
            TokenKind::Header => "Header",
            TokenKind::Bold => "Bold",
            TokenKind::Italic => "Italic",
            TokenKind::Strikethrough => "Strikethrough",
            TokenKind::Quote => "Quote",
            TokenKind::HorizontalLine => "HorizontalLine",
            TokenKind::CodeBlock => "CodeBlock",
            TokenKind::InlineCode => "InlineCode",
            TokenKind::Link => "Link",
            TokenKind::Image => "Image",
            TokenKind::HtmlBlock => "HtmlBlock",
            TokenKind::HtmlInline => "HtmlInline",
            TokenKind::FootnoteDef => "FootnoteDef",
            TokenKind::FootnoteRef => "FootnoteRef",
            TokenKind::ListStart => "ListStart",
            TokenKind::ListEnd => "ListEnd",
            TokenKind::ListItem => "ListItem",
            TokenKind::TaskItem => "TaskItem",
            TokenKind::TableStart => "TableStart",
            TokenKind::TableEnd => "TableEnd",
            TokenKind::RowStart => "RowStart",
            TokenKind::RowEnd => "RowEnd",
            TokenKind::CellStart => "CellStart",
            TokenKind::CellEnd => "CellEnd",
            TokenKind::Eof => "Eof",
            TokenKind::Extension => "Extension",
        }
    }
}
