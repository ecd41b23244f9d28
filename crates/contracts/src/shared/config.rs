use std::time::Duration;

use serde::Deserialize;

use super::i18n::Locale;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub timings: TimingConfig,
    pub preferences: PreferencesConfig,
    pub booking: BookingConfig,
}

/// Delays of the simulated workflows, in milliseconds
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimingConfig {
    pub check_in_delay_ms: u64,
    pub submit_delay_ms: u64,
    pub success_visible_ms: u64,
    pub request_ack_ms: u64,
    pub hero_rotation_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PreferencesConfig {
    pub theme_storage_key: String,
    pub default_locale: Locale,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookingConfig {
    pub slot_interval_minutes: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[timings]
check_in_delay_ms = 2000
submit_delay_ms = 2500
success_visible_ms = 3000
request_ack_ms = 2000
hero_rotation_ms = 4000

[preferences]
theme_storage_key = "theme"
default_locale = "en"

[booking]
slot_interval_minutes = 30
"#;

/// Load configuration.
///
/// The override, when present, is a TOML document whose tables are merged
/// over the embedded default, so it only needs the values it changes.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(text) = override_toml {
        let overrides: toml::Table = toml::from_str(text)?;
        merge(&mut base, overrides);
    }
    let config: AppConfig = toml::Value::Table(base).try_into()?;
    Ok(config)
}

fn merge(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timings: TimingConfig {
                check_in_delay_ms: 2000,
                submit_delay_ms: 2500,
                success_visible_ms: 3000,
                request_ack_ms: 2000,
                hero_rotation_ms: 4000,
            },
            preferences: PreferencesConfig {
                theme_storage_key: "theme".to_string(),
                default_locale: Locale::En,
            },
            booking: BookingConfig {
                slot_interval_minutes: 30,
            },
        }
    }
}

impl TimingConfig {
    pub fn check_in_delay(&self) -> Duration {
        Duration::from_millis(self.check_in_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_visible(&self) -> Duration {
        Duration::from_millis(self.success_visible_ms)
    }

    pub fn request_ack(&self) -> Duration {
        Duration::from_millis(self.request_ack_ms)
    }

    pub fn hero_rotation(&self) -> Duration {
        Duration::from_millis(self.hero_rotation_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override_merges() {
        let config = load_config(Some(
            r#"
            [timings]
            check_in_delay_ms = 500

            [preferences]
            default_locale = "sw"
            "#,
        ))
        .unwrap();
        assert_eq!(config.timings.check_in_delay(), Duration::from_millis(500));
        assert_eq!(config.timings.submit_delay_ms, 2500);
        assert_eq!(config.preferences.default_locale, Locale::Sw);
        assert_eq!(config.preferences.theme_storage_key, "theme");
    }

    #[test]
    fn test_bad_override_is_an_error() {
        assert!(load_config(Some("[timings]\ncheck_in_delay_ms = \"soon\"")).is_err());
        assert!(load_config(Some("not = [valid")).is_err());
    }
}
