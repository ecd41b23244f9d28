//! Light/dark theme resolution.
//!
//! Priority: explicit stored choice, then the OS color scheme, then light.
//! Once the user has chosen, OS changes are ignored.

use std::collections::HashMap;

/// Available themes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used as CSS class and stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Durable key/value storage for user preferences
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub struct ThemeState<S: PreferenceStore> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the starting theme. Nothing is written to the store here.
    pub fn new(store: S, key: impl Into<String>, os_prefers_dark: Option<bool>) -> Self {
        let key = key.into();
        let theme = store
            .load(&key)
            .and_then(|s| Theme::parse(&s))
            .or_else(|| os_prefers_dark.map(Theme::from_os))
            .unwrap_or_default();
        Self { store, key, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// True once a valid explicit choice is stored
    pub fn has_explicit_choice(&self) -> bool {
        self.store
            .load(&self.key)
            .and_then(|s| Theme::parse(&s))
            .is_some()
    }

    /// Explicit user choice, persisted
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save(&self.key, theme.as_str());
        log::info!("theme set to {}", theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// OS color-scheme change. Returns the new theme when it was applied.
    pub fn on_os_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            return None;
        }
        self.theme = Theme::from_os(prefers_dark);
        Some(self.theme)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "theme";

    #[test]
    fn test_stored_choice_wins_over_os() {
        let state = ThemeState::new(MemoryStore::with(KEY, "light"), KEY, Some(true));
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_os_then_light() {
        let dark = ThemeState::new(MemoryStore::default(), KEY, Some(true));
        assert_eq!(dark.theme(), Theme::Dark);
        let unknown = ThemeState::new(MemoryStore::default(), KEY, None);
        assert_eq!(unknown.theme(), Theme::Light);
    }

    #[test]
    fn test_garbage_stored_value_is_ignored() {
        let state = ThemeState::new(MemoryStore::with(KEY, "purple"), KEY, Some(true));
        assert_eq!(state.theme(), Theme::Dark);
        assert!(!state.has_explicit_choice());
    }

    #[test]
    fn test_initial_resolution_does_not_persist() {
        let state = ThemeState::new(MemoryStore::default(), KEY, Some(true));
        assert_eq!(state.store().load(KEY), None);
    }

    #[test]
    fn test_os_follows_until_user_chooses() {
        let mut state = ThemeState::new(MemoryStore::default(), KEY, Some(true));
        assert_eq!(state.theme(), Theme::Dark);

        assert_eq!(state.on_os_change(false), Some(Theme::Light));
        assert_eq!(state.on_os_change(true), Some(Theme::Dark));

        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.store().load(KEY).as_deref(), Some("light"));

        assert_eq!(state.on_os_change(true), None);
        assert_eq!(state.theme(), Theme::Light);
    }
}
