use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::StoreError;

/// Durable string-to-string persistence.
///
/// Values are expected to hold JSON text; the store itself never inspects
/// them. Operations are not atomic across keys, so multi-key readers (the
/// backup codec) must tolerate read skew.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw value for `key`, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite `key`. Durable once this returns.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Absent keys are not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Every key currently present.
    async fn keys(&self) -> Result<BTreeSet<String>, StoreError>;

    /// Raw value for `key`, or `default` when absent.
    async fn get_or(&self, key: &str, default: &str) -> Result<String, StoreError> {
        Ok(self.get(key).await?.unwrap_or_else(|| default.to_string()))
    }
}
