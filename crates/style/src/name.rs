//! The fixed set of style identifiers shared by the document model, the
//! theme and any renderer consuming the assembled document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown style name: '{0}'")]
pub struct UnknownStyleName(pub String);

/// A paragraph style key.
///
/// `Normal` is the body-text style every paragraph starts with. `NoSpacing` is
/// the same face without paragraph spacing, used for dense blocks such as
/// contents entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum StyleName {
    #[default]
    #[serde(alias = "Paragraph")]
    Normal,
    NoSpacing,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
}

impl StyleName {
    pub const HEADINGS: [StyleName; 6] = [
        StyleName::Heading1,
        StyleName::Heading2,
        StyleName::Heading3,
        StyleName::Heading4,
        StyleName::Heading5,
        StyleName::Heading6,
    ];

    pub const ALL: [StyleName; 8] = [
        StyleName::Normal,
        StyleName::NoSpacing,
        StyleName::Heading1,
        StyleName::Heading2,
        StyleName::Heading3,
        StyleName::Heading4,
        StyleName::Heading5,
        StyleName::Heading6,
    ];

    /// Returns the heading style for `level` (1..=6).
    pub fn heading(level: u8) -> Option<StyleName> {
        match level {
            1..=6 => Some(Self::HEADINGS[usize::from(level - 1)]),
            _ => None,
        }
    }

    /// The heading level (1..=6) of this style, or `None` for body styles.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            StyleName::Heading1 => Some(1),
            StyleName::Heading2 => Some(2),
            StyleName::Heading3 => Some(3),
            StyleName::Heading4 => Some(4),
            StyleName::Heading5 => Some(5),
            StyleName::Heading6 => Some(6),
            StyleName::Normal | StyleName::NoSpacing => None,
        }
    }

    pub fn is_heading(self) -> bool {
        self.heading_level().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Normal => "Normal",
            StyleName::NoSpacing => "NoSpacing",
            StyleName::Heading1 => "Heading1",
            StyleName::Heading2 => "Heading2",
            StyleName::Heading3 => "Heading3",
            StyleName::Heading4 => "Heading4",
            StyleName::Heading5 => "Heading5",
            StyleName::Heading6 => "Heading6",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleName {
    type Err = UnknownStyleName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" | "Paragraph" => Ok(StyleName::Normal),
            "NoSpacing" => Ok(StyleName::NoSpacing),
            other => other
                .strip_prefix("Heading")
                .and_then(|n| n.parse::<u8>().ok())
                .and_then(StyleName::heading)
                .ok_or_else(|| UnknownStyleName(other.to_string())),
        }
    }
}
