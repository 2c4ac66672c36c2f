use serde::{Deserialize, Serialize};

/// Weight of a style's text; headings default to bold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}
