use crate::error::ImportError;
use crate::store::KvStore;
use async_trait::async_trait;
use log::info;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-process store used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every write.
    pub fn rejecting() -> Self {
        Self {
            entries: Mutex::default(),
            reject_writes: true,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // a panic while holding the lock cannot leave the map half-written
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    fn store_name(&self) -> &str {
        "memory"
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), ImportError> {
        if self.reject_writes {
            return Err(ImportError::StoreRejected {
                status: 0,
                body: "memory store is read-only".to_string(),
            });
        }

        info!("Dry run: storing {} ({} bytes)", key, value.len());
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
