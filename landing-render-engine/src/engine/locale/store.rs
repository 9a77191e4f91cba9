use bevy::prelude::*;
use content::catalog::Locale;
use content::tuning::LOCALE_STORAGE_KEY;
use std::sync::Mutex;

/// Durable key-value slot for the chosen language tag. Kept narrow so
/// the browser, filesystem and test backends stay interchangeable.
pub trait LocaleStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, tag: &str);
}

/// In-memory store used by tests and as a last-resort fallback.
#[derive(Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl LocaleStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, tag: &str) {
        if let Ok(mut slot) = self.value.lock() {
            *slot = Some(tag.to_string());
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl LocaleStore for BrowserStore {
    fn load(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(LOCALE_STORAGE_KEY).ok()?
    }

    fn save(&self, tag: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            warn!("localStorage unavailable, locale choice not persisted");
            return;
        };
        if storage.set_item(LOCALE_STORAGE_KEY, tag).is_err() {
            warn!("Failed to persist locale '{tag}'");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new() -> Self {
        let base = std::env::var_os("HOME")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        Self {
            path: base.join(format!(".{LOCALE_STORAGE_KEY}")),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocaleStore for FileStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
    }

    fn save(&self, tag: &str) {
        if let Err(err) = std::fs::write(&self.path, tag) {
            warn!("Failed to persist locale '{tag}': {err}");
        }
    }
}

/// The durable store for the running platform.
pub fn platform_store() -> Box<dyn LocaleStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileStore::new())
    }
}

/// Language reported by the environment, if any.
pub fn environment_language() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.navigator().language())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("LANG").ok()
    }
}

/// Detection order: persisted value, then environment, then default.
pub fn detect_locale(store: &dyn LocaleStore) -> Locale {
    resolve_detection(store.load().as_deref(), environment_language().as_deref())
}

pub fn resolve_detection(stored: Option<&str>, environment: Option<&str>) -> Locale {
    stored
        .and_then(Locale::from_tag)
        .or_else(|| environment.and_then(Locale::from_tag))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_tags() {
        let store = MemoryStore::default();
        assert_eq!(store.load(), None);
        store.save("bn");
        assert_eq!(store.load().as_deref(), Some("bn"));
        store.save("en");
        assert_eq!(store.load().as_deref(), Some("en"));
    }

    #[test]
    fn detection_prefers_the_stored_value() {
        assert_eq!(resolve_detection(Some("bn"), Some("en-US")), Locale::Bn);
        assert_eq!(resolve_detection(Some("bn-BD"), None), Locale::Bn);
    }

    #[test]
    fn detection_falls_back_to_environment_then_default() {
        assert_eq!(resolve_detection(None, Some("bn_BD.UTF-8")), Locale::Bn);
        assert_eq!(resolve_detection(None, Some("de-DE")), Locale::En);
        assert_eq!(resolve_detection(Some("tlh"), None), Locale::En);
        assert_eq!(resolve_detection(None, None), Locale::En);
    }

    #[test]
    fn simulated_reload_restores_the_last_choice() {
        let store = MemoryStore::default();
        store.save(Locale::Bn.as_tag());
        // A fresh detection pass against the same store stands in for a
        // page reload.
        assert_eq!(resolve_detection(store.load().as_deref(), None), Locale::Bn);
    }
}
