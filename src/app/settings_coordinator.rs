//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! Settings are stored as JSON strings in eframe's persistent storage.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise `T::default()`.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Loads a setting from persistent storage with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if missing or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "seed", &42u64);
        let loaded: u64 = SettingsCoordinator::load_setting(Some(&storage), "seed");
        assert_eq!(loaded, 42);
    }

    #[test]
    fn test_missing_key_falls_back() {
        let storage = MockStorage::new();
        let loaded: u64 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 7);
        assert_eq!(loaded, 7);

        let tried: Option<u64> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(tried, None);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string("bad", "not json".to_string());
        let loaded: u64 = SettingsCoordinator::load_setting(Some(&storage), "bad");
        assert_eq!(loaded, 0);
    }
}
