//! In-process store, used by tests and throwaway sessions.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Copy of every entry, for assertions.
    pub async fn dump(&self) -> BTreeMap<String, String> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<BTreeSet<String>, StoreError> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_maps_to_default() {
        let store = MemoryStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
        assert_eq!(store.get_or("missing", "42").await.unwrap(), "42");

        store.set("present", "null").await.unwrap();
        assert_eq!(store.get_or("present", "42").await.unwrap(), "null");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::with_entries([("a", "1"), ("b", "2")]);
        store.delete("a").await.unwrap();
        store.delete("a").await.unwrap();
        let keys: Vec<_> = store.keys().await.unwrap().into_iter().collect();
        assert_eq!(keys, vec!["b".to_string()]);
    }
}
