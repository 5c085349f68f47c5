use crate::error::ImportError;
use crate::model::Recipe;
use crate::store::KvStore;
use log::{debug, warn};

/// Serializes recipes and writes them to a [`KvStore`], one call per recipe.
pub struct Publisher {
    store: Box<dyn KvStore>,
}

impl Publisher {
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }

    /// Write `recipe` under `key`. Returns whether the store accepted it.
    ///
    /// No retries; the reason for a failure is logged and dropped.
    pub async fn publish(&self, key: &str, recipe: &Recipe) -> bool {
        match self.try_publish(key, recipe).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Upload of {:?} to {} failed: {}", key, self.store.store_name(), e);
                false
            }
        }
    }

    async fn try_publish(&self, key: &str, recipe: &Recipe) -> Result<(), ImportError> {
        if key.is_empty() {
            return Err(ImportError::EmptyKey);
        }

        let payload = recipe.to_json()?;
        debug!("Publishing {} ({} bytes)", key, payload.len());
        self.store.put(key, &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records what it was asked to store.
    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<(String, String)>>>);

    #[async_trait]
    impl KvStore for Recording {
        fn store_name(&self) -> &str {
            "recording"
        }

        async fn put(&self, key: &str, value: &str) -> Result<(), ImportError> {
            self.0
                .lock()
                .unwrap()
                .push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    fn recipe() -> Recipe {
        Recipe {
            name: "Pão de Queijo".to_string(),
            slug: "po-de-queijo".to_string(),
            ingredients: vec!["tapioca flour".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_publish_sends_json_payload() {
        let recording = Recording::default();
        let publisher = Publisher::new(Box::new(recording.clone()));

        assert!(publisher.publish("po-de-queijo", &recipe()).await);

        let calls = recording.0.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "po-de-queijo");
        let stored: Recipe = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(stored, recipe());
        assert!(calls[0].1.contains("Pão de Queijo"));
    }

    #[tokio::test]
    async fn test_rejected_write_is_false() {
        let publisher = Publisher::new(Box::new(MemoryStore::rejecting()));
        assert!(!publisher.publish("po-de-queijo", &recipe()).await);
    }

    #[tokio::test]
    async fn test_empty_key_never_reaches_store() {
        let recording = Recording::default();
        let publisher = Publisher::new(Box::new(recording.clone()));

        assert!(!publisher.publish("", &recipe()).await);
        assert!(recording.0.lock().unwrap().is_empty());
    }
}
