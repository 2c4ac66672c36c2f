//! Installed-font probing backed by the host's font directories.

use crate::font::{FontProvider, DEFAULT_FONT_FAMILY};
use std::collections::BTreeSet;

/// Answers `is_installed` from the fonts fontdb discovers on the system.
///
/// Family names are captured once at construction, so repeated probes during
/// a build see a stable snapshot.
#[derive(Debug, Clone)]
pub struct SystemFontProvider {
    families: BTreeSet<String>,
    default_family: String,
}

impl SystemFontProvider {
    /// Scans the system font directories.
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self::from_database(&db)
    }

    /// Captures the families registered in an existing database.
    pub fn from_database(db: &fontdb::Database) -> Self {
        let families: BTreeSet<String> = db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .collect();

        let sans = db.family_name(&fontdb::Family::SansSerif).to_string();
        let default_family = if families.contains(&sans) {
            sans
        } else {
            DEFAULT_FONT_FAMILY.to_string()
        };

        log::debug!(
            "SystemFontProvider found {} families (default '{}')",
            families.len(),
            default_family
        );

        Self {
            families,
            default_family,
        }
    }
}

impl Default for SystemFontProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FontProvider for SystemFontProvider {
    fn is_installed(&self, family: &str) -> bool {
        self.families.contains(family)
    }

    fn default_family(&self) -> String {
        self.default_family.clone()
    }

    fn name(&self) -> &'static str {
        "SystemFontProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_database_reports_nothing_installed() {
        let db = fontdb::Database::new();
        let provider = SystemFontProvider::from_database(&db);
        assert!(!provider.is_installed("Calibri"));
        assert_eq!(provider.default_family(), DEFAULT_FONT_FAMILY);
    }
}
