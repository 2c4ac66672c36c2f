pub mod fixtures;

use folio::{Document, InstalledFonts, Manifest};
use serde_json::Value;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Builds the document a JSON manifest describes, with no installed fonts.
pub fn build_manifest(manifest: &Value) -> Result<Document, folio::Error> {
    let manifest: Manifest = serde_json::from_value(manifest.clone())?;
    let template = manifest.to_template(Arc::new(InstalledFonts::new()))?;
    Ok(template.build()?)
}

/// Plain text of every heading paragraph, in document order.
pub fn heading_texts(document: &Document) -> Vec<String> {
    use folio::PlainText;
    document
        .sections
        .iter()
        .flat_map(|s| s.headings())
        .map(|p| p.plain_text())
        .collect()
}
