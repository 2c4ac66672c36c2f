//! Depth-first conversion of a markup tree into folio content.

use crate::node::{MarkupNode, NodeKind};
use folio_idf::{ContentNode, FormattedText, Inline, InlineContainer, Paragraph, Symbol, Text, TextFormat};
use folio_style::StyleName;

/// How the converter treats an element, decided by its tag name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Starts a new paragraph in the given style.
    Block(StyleName),
    /// Wraps its children in a styled run.
    Run(TextFormat),
    /// Emits a line-break symbol; children are ignored.
    LineBreak,
    /// Contributes only its children.
    Container,
}

impl TagKind {
    pub fn classify(tag: &str) -> TagKind {
        match tag.to_ascii_lowercase().as_str() {
            "p" => TagKind::Block(StyleName::Normal),
            "h1" => TagKind::Block(StyleName::Heading1),
            "h2" => TagKind::Block(StyleName::Heading2),
            "h3" => TagKind::Block(StyleName::Heading3),
            "h4" => TagKind::Block(StyleName::Heading4),
            "h5" => TagKind::Block(StyleName::Heading5),
            "h6" => TagKind::Block(StyleName::Heading6),
            "b" | "strong" => TagKind::Run(TextFormat::BOLD),
            "i" | "em" => TagKind::Run(TextFormat::ITALIC),
            "u" => TagKind::Run(TextFormat::UNDERLINE),
            "br" => TagKind::LineBreak,
            _ => TagKind::Container,
        }
    }

    fn of<N: MarkupNode>(node: &N) -> TagKind {
        node.tag_name()
            .map(|tag| TagKind::classify(&tag))
            .unwrap_or(TagKind::Container)
    }
}

/// Converts markup into paragraphs and styled runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyledTextBuilder;

impl StyledTextBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Converts a tree for insertion at section level.
    ///
    /// Block tags open a new paragraph in the matching style. Text and runs
    /// met outside any block collect in a loose body paragraph, reused until
    /// the next block tag, whitespace included, so no text is lost.
    pub fn blocks<N: MarkupNode>(&self, root: &N) -> Vec<ContentNode> {
        let mut sink = BlockSink::default();
        self.visit_block(root, &mut sink);
        let blocks = sink.finish();
        log::trace!("Converted markup into {} block(s)", blocks.len());
        blocks
    }

    /// Converts a tree for insertion into a paragraph or styled run.
    ///
    /// Block tags have no meaning here and contribute only their children.
    pub fn inlines<N: MarkupNode>(&self, root: &N) -> Vec<Inline> {
        let mut out = Vec::new();
        self.visit_inline(root, &mut out);
        out
    }

    fn visit_block<N: MarkupNode>(&self, node: &N, sink: &mut BlockSink) {
        match node.kind() {
            NodeKind::Document => {
                for child in node.children() {
                    self.visit_block(&child, sink);
                }
            }
            NodeKind::Text => {
                if let Some(text) = node.text() {
                    sink.loose_paragraph().add_text(text.into_owned());
                }
            }
            NodeKind::Element => match TagKind::of(node) {
                TagKind::Block(style) => {
                    sink.flush();
                    let mut paragraph = Paragraph::with_style(style);
                    for child in node.children() {
                        self.visit_inline(&child, &mut paragraph.children);
                    }
                    sink.blocks.push(paragraph.into());
                }
                TagKind::Run(_) | TagKind::LineBreak => {
                    let paragraph = sink.loose_paragraph();
                    self.visit_inline(node, &mut paragraph.children);
                }
                TagKind::Container => {
                    for child in node.children() {
                        self.visit_block(&child, sink);
                    }
                }
            },
            NodeKind::Other => {}
        }
    }

    fn visit_inline<N: MarkupNode>(&self, node: &N, out: &mut Vec<Inline>) {
        match node.kind() {
            NodeKind::Text => {
                if let Some(text) = node.text() {
                    out.push(Text::new(text.into_owned()).into());
                }
            }
            NodeKind::Element => match TagKind::of(node) {
                TagKind::Run(format) => {
                    let mut run = FormattedText::new(format);
                    for child in node.children() {
                        self.visit_inline(&child, &mut run.children);
                    }
                    out.push(run.into());
                }
                TagKind::LineBreak => out.push(Symbol::LineBreak.into()),
                TagKind::Block(_) | TagKind::Container => {
                    for child in node.children() {
                        self.visit_inline(&child, out);
                    }
                }
            },
            NodeKind::Document => {
                for child in node.children() {
                    self.visit_inline(&child, out);
                }
            }
            NodeKind::Other => {}
        }
    }
}

#[derive(Default)]
struct BlockSink {
    blocks: Vec<ContentNode>,
    loose: Option<Paragraph>,
}

impl BlockSink {
    fn loose_paragraph(&mut self) -> &mut Paragraph {
        self.loose.get_or_insert_with(|| Paragraph::with_style(StyleName::Normal))
    }

    fn flush(&mut self) {
        if let Some(paragraph) = self.loose.take() {
            self.blocks.push(paragraph.into());
        }
    }

    fn finish(mut self) -> Vec<ContentNode> {
        self.flush();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Markup;
    use folio_idf::PlainText;

    fn el(tag: &str, children: Vec<Markup>) -> Markup {
        Markup::element(tag, children)
    }

    fn txt(s: &str) -> Markup {
        Markup::text(s)
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(TagKind::classify("H2"), TagKind::Block(StyleName::Heading2));
        assert_eq!(TagKind::classify("Strong"), TagKind::Run(TextFormat::BOLD));
        assert_eq!(TagKind::classify("EM"), TagKind::Run(TextFormat::ITALIC));
        assert_eq!(TagKind::classify("div"), TagKind::Container);
    }

    #[test]
    fn test_heading_and_body_paragraphs() {
        let root = Markup::Document(vec![
            el("h1", vec![txt("Title")]),
            el("p", vec![txt("Body")]),
        ]);
        let blocks = StyledTextBuilder::new().blocks(&&root);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].as_paragraph().map(|p| p.style), Some(StyleName::Heading1));
        assert_eq!(blocks[1].as_paragraph().map(|p| p.style), Some(StyleName::Normal));
        assert_eq!(blocks.plain_text(), "TitleBody");
    }

    #[test]
    fn test_loose_text_shares_one_paragraph_until_next_block() {
        let root = Markup::Document(vec![
            txt("a"),
            el("b", vec![txt("b")]),
            el("p", vec![txt("c")]),
            txt("d"),
        ]);
        let blocks = StyledTextBuilder::new().blocks(&&root);
        let texts: Vec<String> = blocks.iter().map(|b| b.plain_text()).collect();
        assert_eq!(texts, vec!["ab", "c", "d"]);
    }

    #[test]
    fn test_whitespace_between_blocks_is_kept() {
        let root = Markup::Document(vec![el("p", vec![txt("a")]), txt(" "), el("p", vec![txt("b")])]);
        let blocks = StyledTextBuilder::new().blocks(&&root);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].as_paragraph().map(|p| p.style), Some(StyleName::Normal));
        assert_eq!(blocks.plain_text(), "a b");
    }

    #[test]
    fn test_unknown_tags_pass_through() {
        let root = el(
            "div",
            vec![el("span", vec![txt("x")]), el("p", vec![el("font", vec![txt("y")])])],
        );
        let blocks = StyledTextBuilder::new().blocks(&&root);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].as_paragraph().map(|p| p.style), Some(StyleName::Normal));
        assert_eq!(blocks.plain_text(), "xy");
    }

    #[test]
    fn test_break_ignores_children() {
        let root = el("p", vec![txt("a"), el("br", vec![txt("ignored")]), txt("b")]);
        let blocks = StyledTextBuilder::new().blocks(&&root);
        assert_eq!(blocks.plain_text(), "a\nb");
    }

    #[test]
    fn test_block_tags_in_inline_context_pass_through() {
        let root = el("b", vec![el("h2", vec![txt("x")])]);
        let inlines = StyledTextBuilder::new().inlines(&&root);
        assert_eq!(inlines.len(), 1);
        match &inlines[0] {
            Inline::Formatted(run) => {
                assert_eq!(run.format, TextFormat::BOLD);
                assert_eq!(run.plain_text(), "x");
            }
            other => panic!("expected a styled run, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_markup_yields_nothing() {
        let root = Markup::Document(vec![]);
        assert!(StyledTextBuilder::new().blocks(&&root).is_empty());
        assert!(StyledTextBuilder::new().inlines(&&root).is_empty());
    }
}
