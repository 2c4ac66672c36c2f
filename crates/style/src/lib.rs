pub mod font;
pub mod name;
pub mod stylesheet;

pub use font::FontWeight;
pub use name::{StyleName, UnknownStyleName};
pub use stylesheet::{ElementStyle, Stylesheet};
