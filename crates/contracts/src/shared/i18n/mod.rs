//! User-facing text in the supported locales.
//!
//! Lookup order: active locale, then the default locale (English), then the
//! key itself so a missing entry is visible instead of blank.

mod en;
mod sw;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

type Table = HashMap<&'static str, &'static str>;

static EN: Lazy<Table> = Lazy::new(|| en::ENTRIES.iter().copied().collect());
static SW: Lazy<Table> = Lazy::new(|| sw::ENTRIES.iter().copied().collect());

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Sw,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sw => "sw",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "sw" => Some(Locale::Sw),
            _ => None,
        }
    }

    /// Name of the locale in its own language
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Sw => "Kiswahili",
        }
    }

    /// The other supported locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Sw,
            Locale::Sw => Locale::En,
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Sw]
    }

    fn table(&self) -> &'static Table {
        match self {
            Locale::En => &EN,
            Locale::Sw => &SW,
        }
    }
}

fn lookup<'a>(active: &Table, fallback: &Table, key: &'a str) -> &'a str {
    active
        .get(key)
        .or_else(|| fallback.get(key))
        .copied()
        .unwrap_or(key)
}

/// Localized text for `key`
pub fn translate(locale: Locale, key: &str) -> &str {
    lookup(locale.table(), Locale::default().table(), key)
}

/// Localized text with `{name}` placeholders filled in
pub fn translate_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(translate(locale, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_locale_first() {
        assert_eq!(translate(Locale::En, "navHome"), "Home");
        assert_eq!(translate(Locale::Sw, "navHome"), "Nyumbani");
    }

    #[test]
    fn test_missing_key_in_active_falls_back_to_default() {
        let active: Table = [("a", "alpha")].into_iter().collect();
        let fallback: Table = [("a", "A"), ("b", "B")].into_iter().collect();
        assert_eq!(lookup(&active, &fallback, "a"), "alpha");
        assert_eq!(lookup(&active, &fallback, "b"), "B");
        assert_eq!(lookup(&active, &fallback, "c"), "c");
    }

    #[test]
    fn test_unknown_key_renders_itself() {
        assert_eq!(translate(Locale::Sw, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_swahili_covers_every_english_key() {
        let missing: Vec<_> = EN.keys().filter(|k| !SW.contains_key(*k)).collect();
        assert!(missing.is_empty(), "untranslated: {:?}", missing);
    }

    #[test]
    fn test_placeholders() {
        let text = translate_with(
            Locale::En,
            "clientCar",
            &[("client", "Athman Ibrahim"), ("car", "Toyota Premio 2018")],
        );
        assert_eq!(text, "Athman Ibrahim's Car — Toyota Premio 2018");
    }

    #[test]
    fn test_toggle_and_codes() {
        assert_eq!(Locale::En.toggled(), Locale::Sw);
        assert_eq!(Locale::Sw.toggled(), Locale::En);
        assert_eq!(Locale::from_code(" SW "), Some(Locale::Sw));
        assert_eq!(Locale::from_code("fr"), None);
    }
}
