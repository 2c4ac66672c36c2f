use serde::{Deserialize, Serialize};

/// An entry in the table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// Heading level (1 = Heading1, 2 = Heading2, etc.)
    pub level: u8,
    /// The text content of the heading.
    pub text: String,
    /// The anchor ID to link to this heading, if one has been assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

impl TocEntry {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            target_id: None,
        }
    }

    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }
}
