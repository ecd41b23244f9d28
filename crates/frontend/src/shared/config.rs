use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

use super::storage;

/// localStorage key holding an optional TOML override of the embedded config
const CONFIG_OVERRIDE_KEY: &str = "app_config";

/// Load configuration and provide it to the component tree.
///
/// Search order:
/// 1. TOML override in localStorage, merged over the defaults
/// 2. Embedded default config
pub fn provide_app_config() -> AppConfig {
    let override_toml = storage::get_item(CONFIG_OVERRIDE_KEY);
    let config = match load_config(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid config override: {:#}", e);
            load_config(None).unwrap_or_default()
        }
    };
    provide_context(config.clone());
    config
}

/// Hook to read the configuration
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found. Call provide_app_config in App.")
}
