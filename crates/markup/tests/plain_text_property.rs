use folio_idf::{Paragraph, PlainText, Section, SectionRole};
use folio_markup::{AddMarkup, Markup};
use proptest::prelude::*;

const TAGS: &[&str] = &["p", "h1", "h2", "h6", "b", "strong", "i", "em", "u", "span", "div"];

fn markup_tree() -> impl Strategy<Value = Markup> {
    let leaf = prop_oneof![
        4 => "[a-zA-Z0-9 .,;!?'-]{1,8}".prop_map(Markup::Text),
        1 => "[ \\t\\n]{1,3}".prop_map(Markup::Text),
        1 => Just(Markup::element("br", vec![])),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        (prop::sample::select(TAGS), prop::collection::vec(inner, 0..5))
            .prop_map(|(tag, children)| Markup::element(tag, children))
    })
}

/// Text the converter must reproduce: every text node in order, a newline per
/// `<br>`, and nothing from the children of a `<br>`.
fn expected_text(node: &Markup, out: &mut String) {
    match node {
        Markup::Text(s) => out.push_str(s),
        Markup::Element { tag, .. } if tag == "br" => out.push('\n'),
        Markup::Element { children, .. } | Markup::Document(children) => {
            for child in children {
                expected_text(child, out);
            }
        }
    }
}

proptest! {
    #[test]
    fn section_plain_text_matches_markup_text(children in prop::collection::vec(markup_tree(), 0..6)) {
        let root = Markup::Document(children);
        let mut expected = String::new();
        expected_text(&root, &mut expected);

        let mut section = Section::new(SectionRole::Content);
        section.add_markup(&&root);
        prop_assert_eq!(section.plain_text(), expected);
    }

    #[test]
    fn paragraph_plain_text_matches_markup_text(tree in markup_tree()) {
        let mut expected = String::new();
        expected_text(&tree, &mut expected);

        let mut paragraph = Paragraph::new();
        paragraph.add_markup(&&tree);
        prop_assert_eq!(paragraph.plain_text(), expected);
    }
}

#[test]
fn parsed_html_keeps_text_order() {
    let mut section = Section::new(SectionRole::Content);
    section.add_html("lead <em>in</em><h2>Head</h2>tail &lt;3");
    assert_eq!(section.plain_text(), "lead inHeadtail <3");
    assert_eq!(section.elements.len(), 3);
}
