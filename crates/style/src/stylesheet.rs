//! Defines the document-level stylesheet: one [`ElementStyle`] per [`StyleName`].

use super::font::FontWeight;
use super::name::StyleName;
use folio_types::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Visual attributes attached to a style key.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Space above the paragraph, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f32>,
    /// Space below the paragraph, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stylesheet {
    styles: BTreeMap<StyleName, ElementStyle>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::standard()
    }
}

impl Stylesheet {
    /// A stylesheet with no attributes set on any key.
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// The baseline every new document starts with: all eight keys present,
    /// body text at 11pt, headings stepping down from 16pt.
    pub fn standard() -> Self {
        let mut sheet = Self::empty();
        sheet.styles.insert(
            StyleName::Normal,
            ElementStyle {
                font_size: Some(11.0),
                space_after: Some(8.0),
                ..Default::default()
            },
        );
        sheet.styles.insert(
            StyleName::NoSpacing,
            ElementStyle {
                font_size: Some(11.0),
                space_before: Some(0.0),
                space_after: Some(0.0),
                ..Default::default()
            },
        );
        for (style, size) in StyleName::HEADINGS.into_iter().zip([16.0, 13.0, 12.0, 11.0, 11.0, 11.0]) {
            sheet.styles.insert(
                style,
                ElementStyle {
                    font_size: Some(size),
                    font_weight: Some(FontWeight::Bold),
                    space_before: Some(12.0),
                    space_after: Some(4.0),
                    ..Default::default()
                },
            );
        }
        sheet
    }

    /// Looks up a style by its key.
    pub fn get(&self, name: StyleName) -> Option<&ElementStyle> {
        self.styles.get(&name)
    }

    /// Returns the style for `name`, inserting an empty one if absent.
    pub fn get_mut(&mut self, name: StyleName) -> &mut ElementStyle {
        self.styles.entry(name).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleName, &ElementStyle)> {
        self.styles.iter().map(|(name, style)| (*name, style))
    }
}
