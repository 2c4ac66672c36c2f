pub mod color;
pub mod document;

pub use color::Color;
pub use document::TocEntry;
