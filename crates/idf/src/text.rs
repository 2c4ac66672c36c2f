//! Inline content: text leaves, symbol characters and styled runs.

use crate::block::ContentNode;
use serde::Serialize;

/// A run of literal text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Text {
    pub content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A named special character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Symbol {
    #[default]
    Blank,
    Bullet,
    Copyright,
    EmQuarter,
    Em,
    EmDash,
    En,
    EnDash,
    Euro,
    NotEqual,
    LineBreak,
    ParaBreak,
    Trademark,
    RegisteredTrademark,
    Tab,
    HardBlank,
}

impl Symbol {
    /// The Unicode scalar a symbol stands for in plain text.
    pub fn to_char(self) -> char {
        match self {
            Symbol::Bullet => '\u{2022}',
            Symbol::Copyright => '\u{00A9}',
            Symbol::EmQuarter => '\u{2012}',
            Symbol::Em | Symbol::EmDash => '\u{2014}',
            Symbol::En | Symbol::EnDash => '\u{2013}',
            Symbol::Euro => '\u{20AC}',
            Symbol::NotEqual => '\u{2260}',
            Symbol::LineBreak | Symbol::ParaBreak => '\n',
            Symbol::Trademark => '\u{2122}',
            Symbol::RegisteredTrademark => '\u{00AE}',
            Symbol::Tab => '\t',
            Symbol::HardBlank => '\u{00A0}',
            Symbol::Blank => ' ',
        }
    }
}

/// Emphasis attributes of a styled run.
///
/// Formats compose additively: a run nested in a bold run nested in an
/// italic run renders bold and italic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextFormat {
    pub const PLAIN: TextFormat = TextFormat {
        bold: false,
        italic: false,
        underline: false,
    };
    pub const BOLD: TextFormat = TextFormat {
        bold: true,
        ..TextFormat::PLAIN
    };
    pub const ITALIC: TextFormat = TextFormat {
        italic: true,
        ..TextFormat::PLAIN
    };
    pub const UNDERLINE: TextFormat = TextFormat {
        underline: true,
        ..TextFormat::PLAIN
    };

    /// The union of both attribute sets.
    pub fn merge(self, other: TextFormat) -> TextFormat {
        TextFormat {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
        }
    }

    pub fn is_plain(self) -> bool {
        self == TextFormat::PLAIN
    }
}

/// An inline-level node inside a paragraph or styled run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    Text(Text),
    Character { symbol: Symbol },
    Formatted(FormattedText),
    Hyperlink(Hyperlink),
    Footnote(Footnote),
}

impl From<Text> for Inline {
    fn from(text: Text) -> Self {
        Inline::Text(text)
    }
}

impl From<Symbol> for Inline {
    fn from(symbol: Symbol) -> Self {
        Inline::Character { symbol }
    }
}

impl From<FormattedText> for Inline {
    fn from(run: FormattedText) -> Self {
        Inline::Formatted(run)
    }
}

impl From<Hyperlink> for Inline {
    fn from(link: Hyperlink) -> Self {
        Inline::Hyperlink(link)
    }
}

impl From<Footnote> for Inline {
    fn from(note: Footnote) -> Self {
        Inline::Footnote(note)
    }
}

/// Shared mutation API for every node that holds inline children.
pub trait InlineContainer {
    fn inlines(&self) -> &[Inline];
    fn inlines_mut(&mut self) -> &mut Vec<Inline>;

    fn push_inline(&mut self, inline: impl Into<Inline>) -> &mut Self
    where
        Self: Sized,
    {
        self.inlines_mut().push(inline.into());
        self
    }

    fn add_text(&mut self, content: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.push_inline(Text::new(content))
    }

    fn add_character(&mut self, symbol: Symbol) -> &mut Self
    where
        Self: Sized,
    {
        self.push_inline(symbol)
    }

    fn add_line_break(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.add_character(Symbol::LineBreak)
    }

    fn is_empty(&self) -> bool {
        self.inlines().is_empty()
    }
}

/// A styled run: inline children rendered with additional emphasis.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FormattedText {
    #[serde(flatten)]
    pub format: TextFormat,
    pub children: Vec<Inline>,
}

impl FormattedText {
    pub fn new(format: TextFormat) -> Self {
        Self {
            format,
            children: Vec::new(),
        }
    }

    pub fn bold() -> Self {
        Self::new(TextFormat::BOLD)
    }

    pub fn italic() -> Self {
        Self::new(TextFormat::ITALIC)
    }

    pub fn underline() -> Self {
        Self::new(TextFormat::UNDERLINE)
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.add_text(content);
        self
    }

    pub fn child(mut self, inline: impl Into<Inline>) -> Self {
        self.push_inline(inline);
        self
    }
}

impl InlineContainer for FormattedText {
    fn inlines(&self) -> &[Inline] {
        &self.children
    }

    fn inlines_mut(&mut self) -> &mut Vec<Inline> {
        &mut self.children
    }
}

/// A link to an anchor id or an external target.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Hyperlink {
    pub target: String,
    pub children: Vec<Inline>,
}

impl Hyperlink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            children: Vec::new(),
        }
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.add_text(content);
        self
    }
}

impl InlineContainer for Hyperlink {
    fn inlines(&self) -> &[Inline] {
        &self.children
    }

    fn inlines_mut(&mut self) -> &mut Vec<Inline> {
        &mut self.children
    }
}

/// A footnote anchored at its position in the surrounding run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Footnote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub elements: Vec<ContentNode>,
}

/// A flattened piece of text with the emphasis in effect at its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub format: TextFormat,
}

/// Flattens an inline tree into spans, composing nested formats.
///
/// Footnote bodies are block content and are not part of the run.
pub fn styled_spans(inlines: &[Inline]) -> Vec<StyledSpan> {
    let mut spans = Vec::new();
    collect_spans(inlines, TextFormat::PLAIN, &mut spans);
    spans
}

fn collect_spans(inlines: &[Inline], format: TextFormat, spans: &mut Vec<StyledSpan>) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => spans.push(StyledSpan {
                text: text.content.clone(),
                format,
            }),
            Inline::Character { symbol } => spans.push(StyledSpan {
                text: symbol.to_char().to_string(),
                format,
            }),
            Inline::Formatted(run) => collect_spans(&run.children, format.merge(run.format), spans),
            Inline::Hyperlink(link) => collect_spans(&link.children, format, spans),
            Inline::Footnote(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_mapping() {
        assert_eq!(Symbol::Bullet.to_char(), '•');
        assert_eq!(Symbol::EmDash.to_char(), '—');
        assert_eq!(Symbol::Em.to_char(), '—');
        assert_eq!(Symbol::EnDash.to_char(), '–');
        assert_eq!(Symbol::EmQuarter.to_char(), '\u{2012}');
        assert_eq!(Symbol::Euro.to_char(), '€');
        assert_eq!(Symbol::NotEqual.to_char(), '≠');
        assert_eq!(Symbol::ParaBreak.to_char(), '\n');
        assert_eq!(Symbol::HardBlank.to_char(), '\u{00A0}');
        assert_eq!(Symbol::default().to_char(), ' ');
    }

    #[test]
    fn test_nested_formats_are_additive() {
        let run = FormattedText::italic()
            .text("a")
            .child(FormattedText::bold().child(FormattedText::underline().text("b")));

        let spans = styled_spans(&[run.into()]);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].format, TextFormat::ITALIC);
        assert_eq!(
            spans[1].format,
            TextFormat {
                bold: true,
                italic: true,
                underline: true
            }
        );
    }

    #[test]
    fn test_hyperlink_keeps_surrounding_format() {
        let run = FormattedText::bold().child(Hyperlink::new("#x").text("link"));
        let spans = styled_spans(&[run.into()]);
        assert_eq!(spans, vec![StyledSpan { text: "link".into(), format: TextFormat::BOLD }]);
    }

    #[test]
    fn test_inline_container_chaining() {
        let mut run = FormattedText::new(TextFormat::PLAIN);
        run.add_text("a").add_line_break().add_character(Symbol::Tab);
        assert_eq!(run.children.len(), 3);
        assert!(!InlineContainer::is_empty(&run));
    }
}
