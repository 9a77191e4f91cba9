use bevy::asset::LoadState;
use bevy::prelude::*;
use content::catalog::{Locale, SUPPORTED_LOCALES, TranslationCatalog, resolve};
use serde::Deserialize;
use std::collections::HashMap;

use super::store::{LocaleStore, detect_locale, platform_store};
use crate::engine::core::app_state::LoadingProgress;

/// One locale's catalog, parsed from its JSON asset.
#[derive(Asset, TypePath, Deserialize)]
pub struct CatalogAsset(pub TranslationCatalog);

/// The active locale and the store its changes persist through.
#[derive(Resource)]
pub struct LocaleState {
    pub current: Locale,
    store: Box<dyn LocaleStore>,
}

impl LocaleState {
    /// Detect the starting locale through the platform store.
    pub fn detect() -> Self {
        Self::with_store(platform_store())
    }

    pub fn with_store(store: Box<dyn LocaleStore>) -> Self {
        let current = detect_locale(&*store);
        info!("Locale detected: {}", current.as_tag());
        Self { current, store }
    }

    pub fn set(&mut self, locale: Locale) {
        if locale != self.current {
            self.current = locale;
            self.store.save(locale.as_tag());
            info!("Locale switched to {}", locale.as_tag());
        }
    }

    pub fn toggle(&mut self) {
        self.set(self.current.toggled());
    }
}

/// Catalog handles per locale plus key resolution with fallback to the
/// default locale and finally the key itself.
#[derive(Resource, Default)]
pub struct Translator {
    handles: HashMap<Locale, Handle<CatalogAsset>>,
}

impl Translator {
    pub fn set_handle(&mut self, locale: Locale, handle: Handle<CatalogAsset>) {
        self.handles.insert(locale, handle);
    }

    pub fn handles(&self) -> impl Iterator<Item = &Handle<CatalogAsset>> {
        self.handles.values()
    }

    pub fn translate<'a>(
        &self,
        catalogs: &'a Assets<CatalogAsset>,
        locale: Locale,
        key: &'a str,
    ) -> &'a str {
        let active = self.catalog(catalogs, locale);
        let fallback = self.catalog(catalogs, Locale::default());
        resolve(active, fallback, key)
    }

    fn catalog<'a>(
        &self,
        catalogs: &'a Assets<CatalogAsset>,
        locale: Locale,
    ) -> Option<&'a TranslationCatalog> {
        self.handles
            .get(&locale)
            .and_then(|handle| catalogs.get(handle))
            .map(|asset| &asset.0)
    }
}

/// Catalog key rendered by a text entity; re-resolved whenever the
/// locale changes.
#[derive(Component)]
pub struct TranslationKey(pub String);

impl TranslationKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

/// Kick off loading of every supported locale's catalog.
pub fn start_catalog_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut translator = Translator::default();
    for locale in SUPPORTED_LOCALES {
        let path = locale.catalog_path();
        println!("Loading locale catalog: {path}");
        translator.set_handle(locale, asset_server.load(path));
    }
    commands.insert_resource(translator);
}

/// Mark the catalogs settled once each has loaded or failed terminally.
/// A failed catalog just means its keys resolve through the fallback.
pub fn poll_catalogs(
    translator: Res<Translator>,
    catalogs: Res<Assets<CatalogAsset>>,
    asset_server: Res<AssetServer>,
    mut progress: ResMut<LoadingProgress>,
) {
    if progress.catalogs_settled {
        return;
    }
    let settled = translator.handles().all(|handle| {
        if catalogs.get(handle).is_some() {
            return true;
        }
        match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Failed(err)) => {
                warn!("Locale catalog failed to load: {err}");
                true
            }
            _ => false,
        }
    });
    if settled {
        println!("Locale catalogs settled");
        progress.catalogs_settled = true;
    }
}

/// Fill texts whose key was just spawned or rewritten. The gallery and
/// the language switcher repoint keys at runtime, so this watches for
/// mutation, not just insertion.
pub fn fill_new_translations(
    locale: Res<LocaleState>,
    translator: Res<Translator>,
    catalogs: Res<Assets<CatalogAsset>>,
    mut texts: Query<(&TranslationKey, &mut Text), Changed<TranslationKey>>,
) {
    for (key, mut text) in &mut texts {
        text.0 = translator
            .translate(&catalogs, locale.current, &key.0)
            .to_string();
    }
}

/// Re-resolve every keyed text when the locale changes.
pub fn refresh_translated_text(
    locale: Res<LocaleState>,
    translator: Res<Translator>,
    catalogs: Res<Assets<CatalogAsset>>,
    mut texts: Query<(&TranslationKey, &mut Text)>,
) {
    if !locale.is_changed() || locale.is_added() {
        return;
    }
    for (key, mut text) in &mut texts {
        text.0 = translator
            .translate(&catalogs, locale.current, &key.0)
            .to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::locale::store::MemoryStore;

    #[test]
    fn locale_changes_persist_through_the_store() {
        let store = MemoryStore::default();
        store.save("en");
        let mut state = LocaleState::with_store(Box::new(store));
        assert_eq!(state.current, Locale::En);

        state.toggle();
        assert_eq!(state.current, Locale::Bn);

        // Rebuilding from the same backing value simulates a reload.
        let reloaded = MemoryStore::default();
        reloaded.save(state.current.as_tag());
        let state = LocaleState::with_store(Box::new(reloaded));
        assert_eq!(state.current, Locale::Bn);
    }

    #[test]
    fn setting_the_same_locale_is_a_no_op() {
        let store = MemoryStore::default();
        let mut state = LocaleState::with_store(Box::new(store));
        let before = state.current;
        state.set(before);
        assert_eq!(state.current, before);
    }
}
