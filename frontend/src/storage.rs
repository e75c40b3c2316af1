use gloo_storage::errors::StorageError as GlooError;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use shared::{KeyValueStore, StorageError};

/// [`KeyValueStore`] backed by the browser's local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match LocalStorage::get(key) {
            Ok(value) => Ok(Some(value)),
            Err(GlooError::KeyNotFound(_)) => Ok(None),
            Err(GlooError::SerdeError(e)) => Err(StorageError::Serialization(e)),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        LocalStorage::set(key, value).map_err(|e| match e {
            GlooError::SerdeError(e) => StorageError::Serialization(e),
            e => StorageError::Unavailable(e.to_string()),
        })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Favorites, RecentViews};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_key_reads_as_none() {
        LocalStorage::delete("nexora-test-missing");
        assert_eq!(
            BrowserStore.get::<Vec<u32>>("nexora-test-missing").unwrap(),
            None
        );
    }

    #[wasm_bindgen_test]
    fn test_favorites_persist_in_local_storage() {
        BrowserStore.remove(shared::storage::FAVORITES_KEY);
        let favorites = Favorites::new(&BrowserStore);
        assert!(favorites.toggle(5).unwrap());
        assert_eq!(
            LocalStorage::get::<Vec<u32>>(shared::storage::FAVORITES_KEY).unwrap(),
            vec![5]
        );
        BrowserStore.remove(shared::storage::FAVORITES_KEY);
    }

    #[wasm_bindgen_test]
    fn test_recent_views_persist_in_local_storage() {
        BrowserStore.remove(shared::storage::RECENT_VIEWS_KEY);
        let recent = RecentViews::new(&BrowserStore);
        recent.add(1).unwrap();
        recent.add(2).unwrap();
        assert_eq!(recent.ids(), vec![2, 1]);
        recent.clear();
        assert!(recent.ids().is_empty());
    }
}
