use contracts::shared::theme::PreferenceStore;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a value from localStorage
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Write a value to localStorage
pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Preference store backed by the browser's localStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        get_item(key)
    }

    fn save(&mut self, key: &str, value: &str) {
        set_item(key, value);
    }
}
