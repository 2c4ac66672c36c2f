//! FontProvider trait for probing which font families are available.
//!
//! Themes pick fonts from ordered preference lists. Resolving a list needs to
//! know which families are installed, and that knowledge comes from a provider
//! so that the choice is deterministic for a fixed snapshot of fonts.

use std::collections::BTreeSet;
use std::fmt::Debug;

/// Family returned when a provider has nothing better to offer.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// A source of truth for installed font families.
///
/// # Implementations
///
/// - `InstalledFonts`: a fixed in-memory snapshot (always available)
/// - `SystemFontProvider`: the host's fonts via fontdb (feature `system-fonts`)
pub trait FontProvider: Send + Sync + Debug {
    /// Returns true if a family with exactly this name is installed.
    fn is_installed(&self, family: &str) -> bool;

    /// The family used when none of the requested names are installed.
    fn default_family(&self) -> String {
        DEFAULT_FONT_FAMILY.to_string()
    }

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// Returns the first family in `preferences` that `provider` reports as
/// installed, or the provider's default family if none are.
///
/// Matching is left-to-right: the first installed name wins.
pub fn best_font_match<S: AsRef<str>>(provider: &dyn FontProvider, preferences: &[S]) -> String {
    match preferences
        .iter()
        .map(AsRef::as_ref)
        .find(|family| provider.is_installed(family))
    {
        Some(family) => family.to_string(),
        None => {
            let fallback = provider.default_family();
            log::debug!(
                "No preferred font installed according to {}; falling back to '{}'",
                provider.name(),
                fallback
            );
            fallback
        }
    }
}

/// A fixed snapshot of installed families.
#[derive(Debug, Clone, Default)]
pub struct InstalledFonts {
    families: BTreeSet<String>,
    default_family: Option<String>,
}

impl InstalledFonts {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a family to the snapshot.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.families.insert(family.into());
        self
    }

    /// Overrides the family reported when nothing matches.
    pub fn with_default_family(mut self, family: impl Into<String>) -> Self {
        self.default_family = Some(family.into());
        self
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for InstalledFonts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            families: iter.into_iter().map(Into::into).collect(),
            default_family: None,
        }
    }
}

impl FontProvider for InstalledFonts {
    fn is_installed(&self, family: &str) -> bool {
        self.families.contains(family)
    }

    fn default_family(&self) -> String {
        self.default_family
            .clone()
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string())
    }

    fn name(&self) -> &'static str {
        "InstalledFonts"
    }
}
