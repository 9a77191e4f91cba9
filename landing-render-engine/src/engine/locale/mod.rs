//! Locale selection, persistence and string resolution.
//!
//! Catalogs are flat JSON assets (one per locale) loaded through the
//! JSON asset plugin. The active locale is detected at startup from the
//! persisted value, then the environment language, then the default,
//! and every change is written back through a [`store::LocaleStore`].
//!
//! Text entities carry a [`translator::TranslationKey`]; switching the
//! locale re-resolves every keyed string in place.

/// Locale persistence behind a narrow store trait (browser localStorage,
/// a native state file, or memory for tests).
pub mod store;

/// Catalog assets, the locale state resource and keyed text refresh.
pub mod translator;
