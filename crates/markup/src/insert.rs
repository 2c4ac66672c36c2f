use crate::builder::StyledTextBuilder;
use crate::html::parse_fragment;
use crate::node::MarkupNode;
use folio_idf::{FormattedText, Hyperlink, InlineContainer, Paragraph, Section};

/// A node markup can be converted into.
///
/// Sections receive paragraphs; paragraphs and runs receive inline content
/// appended after what they already hold.
pub trait AddMarkup {
    fn add_markup<N: MarkupNode>(&mut self, root: &N) -> &mut Self;

    /// Parses `html` and appends the converted content.
    fn add_html(&mut self, html: &str) -> &mut Self {
        let fragment = parse_fragment(html);
        self.add_markup(&fragment.root())
    }
}

impl AddMarkup for Section {
    fn add_markup<N: MarkupNode>(&mut self, root: &N) -> &mut Self {
        self.elements.extend(StyledTextBuilder::new().blocks(root));
        self
    }
}

macro_rules! impl_add_markup_inline {
    ($($ty:ty),*) => {
        $(
            impl AddMarkup for $ty {
                fn add_markup<N: MarkupNode>(&mut self, root: &N) -> &mut Self {
                    self.inlines_mut().extend(StyledTextBuilder::new().inlines(root));
                    self
                }
            }
        )*
    };
}

impl_add_markup_inline!(Paragraph, FormattedText, Hyperlink);
