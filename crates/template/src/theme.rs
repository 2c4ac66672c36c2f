//! Themes map style keys to fonts and colours once per built document.

use folio_idf::Document;
use folio_style::StyleName;
use folio_traits::{best_font_match, FontProvider, InstalledFonts};
use folio_types::Color;
use std::fmt::Debug;
use std::sync::Arc;

/// Applies visual attributes to a freshly created document.
///
/// Only [`setup_styles`](Self::setup_styles) is required. Header and footer
/// setup are extension points that do nothing by default.
pub trait DocumentTheme: Debug {
    fn apply(&self, document: &mut Document) {
        self.setup_styles(document);
        self.setup_headers(document);
        self.setup_footers(document);
    }

    fn setup_styles(&self, document: &mut Document);

    fn setup_headers(&self, _document: &mut Document) {}

    fn setup_footers(&self, _document: &mut Document) {}
}

const DEFAULT_FONTS: [&str; 3] = ["Calibri Light", "Calibri", "Tahoma"];
const DEFAULT_HEADING_COLOR: u32 = 0xff2980b9;

/// Body and heading fonts picked from preference lists, plus one heading
/// colour shared by all six heading levels.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub heading_fonts: Vec<String>,
    pub body_fonts: Vec<String>,
    pub heading_color: Color,
    fonts: Arc<dyn FontProvider>,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self {
            heading_fonts: DEFAULT_FONTS.iter().map(|s| s.to_string()).collect(),
            body_fonts: DEFAULT_FONTS.iter().map(|s| s.to_string()).collect(),
            heading_color: Color::from_argb(DEFAULT_HEADING_COLOR),
            fonts: Arc::new(InstalledFonts::default()),
        }
    }
}

impl DefaultTheme {
    /// The default theme resolving fonts against an empty snapshot, so every
    /// style falls back to the provider's default family.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_provider(mut self, fonts: Arc<dyn FontProvider>) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn with_heading_fonts<S: Into<String>>(mut self, fonts: impl IntoIterator<Item = S>) -> Self {
        self.heading_fonts = fonts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_body_fonts<S: Into<String>>(mut self, fonts: impl IntoIterator<Item = S>) -> Self {
        self.body_fonts = fonts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_heading_color(mut self, color: Color) -> Self {
        self.heading_color = color;
        self
    }

    pub fn body_font(&self) -> String {
        best_font_match(self.fonts.as_ref(), self.body_fonts.as_slice())
    }

    pub fn heading_font(&self) -> String {
        best_font_match(self.fonts.as_ref(), self.heading_fonts.as_slice())
    }
}

impl DocumentTheme for DefaultTheme {
    fn setup_styles(&self, document: &mut Document) {
        let body = self.body_font();
        let heading = self.heading_font();
        log::debug!(
            "Applying theme: body font '{}', heading font '{}' via {}",
            body,
            heading,
            self.fonts.name()
        );

        for name in [StyleName::Normal, StyleName::NoSpacing] {
            document.styles.get_mut(name).font_family = Some(body.clone());
        }
        for name in StyleName::HEADINGS {
            let style = document.styles.get_mut(name);
            style.font_family = Some(heading.clone());
            style.color = Some(self.heading_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts(names: &[&str]) -> Arc<dyn FontProvider> {
        Arc::new(names.iter().copied().collect::<InstalledFonts>())
    }

    #[test]
    fn test_first_installed_font_wins() {
        let theme = DefaultTheme::new().with_font_provider(fonts(&["Tahoma", "Calibri"]));
        assert_eq!(theme.body_font(), "Calibri");

        let mut document = Document::new();
        theme.apply(&mut document);
        assert_eq!(
            document.styles.get(StyleName::NoSpacing).and_then(|s| s.font_family.as_deref()),
            Some("Calibri")
        );
        for name in StyleName::HEADINGS {
            let style = document.styles.get(name).unwrap();
            assert_eq!(style.font_family.as_deref(), Some("Calibri"));
            assert_eq!(style.color.map(Color::to_argb), Some(0xff2980b9));
        }
    }

    #[test]
    fn test_falls_back_to_default_family() {
        let theme = DefaultTheme::new();
        let mut document = Document::new();
        theme.apply(&mut document);
        assert_eq!(
            document.styles.get(StyleName::Normal).and_then(|s| s.font_family.as_deref()),
            Some(folio_traits::DEFAULT_FONT_FAMILY)
        );
    }

    #[test]
    fn test_separate_heading_preferences() {
        let theme = DefaultTheme::new()
            .with_font_provider(fonts(&["Georgia", "Verdana"]))
            .with_heading_fonts(["Georgia"])
            .with_body_fonts(["Verdana"]);
        assert_eq!(theme.heading_font(), "Georgia");
        assert_eq!(theme.body_font(), "Verdana");
    }
}
