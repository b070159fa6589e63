use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use crate::utils::constants::STORAGE_KEY_DISTINCT_ID;

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    LocalStorage::set(key, value).map_err(|e| format!("Error saving to localStorage: {}", e))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}

/// Anonymous visitor id, created once and kept across reloads
pub fn load_or_create_distinct_id() -> String {
    if let Some(id) = load_from_storage::<String>(STORAGE_KEY_DISTINCT_ID) {
        return id;
    }
    let id = uuid::Uuid::new_v4().to_string();
    if let Err(e) = save_to_storage(STORAGE_KEY_DISTINCT_ID, &id) {
        log::warn!("⚠️ {}", e);
    }
    id
}
