//! Theme Controller
//!
//! Light/dark theme state, persisted through a `PreferenceStore` and
//! applied to the document root.

use crate::preferences::PreferenceStore;

/// Class toggled on `<html>` for the dark theme
const DARK_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle: shows where a click will take you.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the saved preference; light when absent or unreadable.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = store
            .get(&key)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { store, key, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Switch theme and write it back. A failed write keeps the new theme
    /// for this session.
    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        if let Err(err) = self.store.set(&self.key, theme.as_str()) {
            log::warn!("theme not persisted: {}", err);
        }
        log::debug!("theme -> {}", theme.as_str());
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.current.toggled())
    }
}

/// Reflect `theme` on `<html>` as `data-theme` plus the dark class.
pub fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
    let _ = root.class_list().toggle_with_force(DARK_CLASS, theme == Theme::Dark);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{MemoryStore, StoreError};
    use std::rc::Rc;

    const KEY: &str = "portfolio-theme";

    #[test]
    fn test_defaults_to_light() {
        let controller = ThemeController::load(MemoryStore::default(), KEY);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_set_theme_survives_reload() {
        let store = Rc::new(MemoryStore::default());
        let mut controller = ThemeController::load(Rc::clone(&store), KEY);
        controller.set_theme(Theme::Dark);

        let reloaded = ThemeController::load(Rc::clone(&store), KEY);
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let mut controller = ThemeController::load(MemoryStore::default(), KEY);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.toggle(), Theme::Light);
    }

    #[test]
    fn test_garbage_preference_falls_back_to_light() {
        let store = MemoryStore::default();
        store.set(KEY, "sepia").unwrap();
        assert_eq!(ThemeController::load(store, KEY).theme(), Theme::Light);
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::WriteFailed(key.to_string()))
        }
    }

    #[test]
    fn test_unwritable_store_keeps_theme_in_memory() {
        let mut controller = ThemeController::load(BrokenStore, KEY);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_icon_points_at_other_theme() {
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::Light.icon(), "🌙");
    }
}
