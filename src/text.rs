//! Plain-text rendering of a built document.
//!
//! One line per paragraph, indented two spaces per outline level; table rows
//! become one line with cells separated by ` | `. Sections are separated by a
//! blank line. Images and charts are shown as bracketed placeholders.

use folio_idf::{ContentNode, Document, PlainText, Section};
use std::fmt::Write;

pub fn render_text(document: &Document) -> String {
    let mut out = String::new();
    for (index, section) in document.sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_section(section, &mut out);
    }
    out
}

fn write_section(section: &Section, out: &mut String) {
    for node in &section.header.elements {
        write_node(node, out);
    }
    for node in &section.elements {
        write_node(node, out);
    }
    for node in &section.footer.elements {
        write_node(node, out);
    }
}

fn write_node(node: &ContentNode, out: &mut String) {
    match node {
        ContentNode::Paragraph(p) => {
            for _ in 0..p.indent {
                out.push_str("  ");
            }
            out.push_str(&p.plain_text());
            out.push('\n');
        }
        ContentNode::Table(table) => {
            for row in &table.rows {
                let cells: Vec<String> = row.cells.iter().map(|c| c.plain_text()).collect();
                out.push_str(&cells.join(" | "));
                out.push('\n');
            }
        }
        ContentNode::Image(image) => {
            let _ = writeln!(out, "[image: {}]", image.src);
        }
        ContentNode::Chart(chart) => {
            let _ = writeln!(out, "[chart: {}]", chart.title.as_deref().unwrap_or("untitled"));
        }
        ContentNode::TextFrame(frame) => {
            for child in &frame.elements {
                write_node(child, out);
            }
        }
    }
}
