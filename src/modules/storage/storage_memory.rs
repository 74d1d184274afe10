// src/modules/storage/storage_memory.rs
//
// In-memory MediaStorage. Backs local development without a GCS bucket and
// every media-lifecycle test that needs to observe stores and deletes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::modules::storage::media_storage::{MediaStorage, MediaStorageError};

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Clone, Default)]
pub struct InMemoryMediaStorage {
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
    deleted_keys: Arc<Mutex<Vec<String>>>,
}

impl InMemoryMediaStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Keys ever passed to `delete`, in call order.
    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted_keys.lock().unwrap().clone()
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl MediaStorage for InMemoryMediaStorage {
    async fn store(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), MediaStorageError> {
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), MediaStorageError> {
        self.objects.lock().unwrap().remove(key);
        self.deleted_keys.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn url(&self, key: &str) -> String {
        format!("memory://{}", key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_then_get_roundtrips() {
        let storage = InMemoryMediaStorage::new();

        storage
            .store("skills/a.png", vec![9, 9], "image/png")
            .await
            .unwrap();

        let stored = storage.get("skills/a.png").unwrap();
        assert_eq!(stored.bytes, vec![9, 9]);
        assert_eq!(stored.content_type, "image/png");
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_recorded() {
        let storage = InMemoryMediaStorage::new();

        storage
            .store("skills/a.png", vec![1], "image/png")
            .await
            .unwrap();
        storage.delete("skills/a.png").await.unwrap();
        storage.delete("skills/a.png").await.unwrap();

        assert!(!storage.contains("skills/a.png"));
        assert_eq!(storage.deleted_keys().len(), 2);
    }
}
