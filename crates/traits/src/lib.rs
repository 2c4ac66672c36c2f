pub mod font;
#[cfg(feature = "system-fonts")]
pub mod system;

pub use font::{best_font_match, FontProvider, InstalledFonts, DEFAULT_FONT_FAMILY};
#[cfg(feature = "system-fonts")]
pub use system::SystemFontProvider;
