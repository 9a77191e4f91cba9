//! Locale identifiers and translation catalogs.
//!
//! A catalog is a flat key to string map parsed from one JSON asset per
//! locale. Keys are either dotted identifiers (`wishlist.title`) or the
//! English copy itself; resolution walks active catalog, fallback
//! catalog, then returns the key unchanged so missing entries degrade to
//! readable English rather than failing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Bn,
}

/// Locales offered by the language switcher, in display order.
pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::Bn];

impl Locale {
    /// Language tag persisted to the locale store.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bn => "bn",
        }
    }

    /// Parse a stored or environment-reported tag. Region subtags are
    /// ignored, so `bn-BD` selects Bengali.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_', '.']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "bn" => Some(Self::Bn),
            _ => None,
        }
    }

    /// The other supported locale, used by the two-state switcher.
    pub fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Bn,
            Self::Bn => Self::En,
        }
    }

    /// Catalog key for the switcher label of this locale.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::En => "languageSwitcher.en",
            Self::Bn => "languageSwitcher.bn",
        }
    }

    /// Relative asset path of this locale's catalog JSON.
    pub fn catalog_path(&self) -> String {
        format!("locales/{}.json", self.as_tag())
    }
}

/// Flat key to translated-string map for one locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationCatalog {
    entries: HashMap<String, String>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve `key` against the active catalog, then the fallback catalog,
/// then the key itself.
pub fn resolve<'a>(
    active: Option<&'a TranslationCatalog>,
    fallback: Option<&'a TranslationCatalog>,
    key: &'a str,
) -> &'a str {
    active
        .and_then(|catalog| catalog.lookup(key))
        .or_else(|| fallback.and_then(|catalog| catalog.lookup(key)))
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(pairs: &[(&str, &str)]) -> TranslationCatalog {
        let mut catalog = TranslationCatalog::new();
        for (key, value) in pairs {
            catalog.insert(*key, *value);
        }
        catalog
    }

    #[test]
    fn resolve_prefers_active_catalog() {
        let active = catalog(&[("hello", "namaskar")]);
        let fallback = catalog(&[("hello", "hello there")]);
        assert_eq!(resolve(Some(&active), Some(&fallback), "hello"), "namaskar");
    }

    #[test]
    fn resolve_falls_back_to_default_then_key() {
        let fallback = catalog(&[("common.closeGallery", "Close Gallery")]);
        assert_eq!(
            resolve(None, Some(&fallback), "common.closeGallery"),
            "Close Gallery"
        );
        assert_eq!(resolve(None, Some(&fallback), "unknown.key"), "unknown.key");
        assert_eq!(resolve(None, None, "plain copy"), "plain copy");
    }

    #[test]
    fn locale_tags_round_trip_and_ignore_regions() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("bn-BD"), Some(Locale::Bn));
        assert_eq!(Locale::from_tag("bn_BD.UTF-8"), Some(Locale::Bn));
        assert_eq!(Locale::from_tag("fr"), None);
        for locale in SUPPORTED_LOCALES {
            assert_eq!(Locale::from_tag(locale.as_tag()), Some(locale));
        }
    }

    #[test]
    fn toggling_alternates_between_supported_locales() {
        assert_eq!(Locale::En.toggled(), Locale::Bn);
        assert_eq!(Locale::Bn.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
    }

    #[test]
    fn catalog_parses_from_flat_json() {
        let parsed: TranslationCatalog =
            serde_json::from_str(r#"{"a.b": "one", "plain": "two"}"#).unwrap();
        assert_eq!(parsed.lookup("a.b"), Some("one"));
        assert_eq!(parsed.lookup("plain"), Some("two"));
        assert_eq!(parsed.len(), 2);
    }
}
