//! In-memory settings store.

use crate::{Result, SettingsStore, StoreError};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Settings store that keeps the blob in memory.
///
/// Used by hosts that own persistence themselves (the blob is handed over
/// through `snapshot`/`with_blob`) and by tests. Clones share the same blob.
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<..>>` so clones held by the host and the rule store see
/// the same data.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    blob: Arc<RwLock<Option<String>>>,
    reject_writes: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl MemorySettingsStore {
    /// Create an empty store (nothing persisted yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let store = Self::default();
        *store.blob.write() = Some(blob.into());
        store
    }

    /// Current persisted blob.
    pub fn snapshot(&self) -> Option<String> {
        self.blob.read().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail (simulates a host write error).
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load_blob(&self) -> Result<Option<String>> {
        Ok(self.blob.read().clone())
    }

    async fn save_blob(&self, contents: &str) -> Result<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("store is read-only".to_string()));
        }

        *self.blob.write() = Some(contents.to_string());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_blob() {
        let store = MemorySettingsStore::new();
        let handle = store.clone();

        store.save_blob("{\"flags\":\"g\"}").await.unwrap();

        assert_eq!(handle.snapshot().as_deref(), Some("{\"flags\":\"g\"}"));
        assert_eq!(handle.save_count(), 1);
    }

    #[tokio::test]
    async fn test_rejected_write_keeps_previous_blob() {
        let store = MemorySettingsStore::with_blob("old");
        store.set_reject_writes(true);

        let result = store.save_blob("new").await;

        assert!(matches!(result, Err(StoreError::Rejected(_))));
        assert_eq!(store.load_blob().await.unwrap().as_deref(), Some("old"));
        assert_eq!(store.save_count(), 0);
    }
}
