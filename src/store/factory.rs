use crate::config::{StoreBackend, StoreConfig};
use crate::error::ImportError;
use crate::store::{CloudflareStore, KvStore, MemoryStore, WranglerStore};

pub struct StoreFactory;

impl StoreFactory {
    /// Create the configured backend
    pub fn create(config: &StoreConfig) -> Result<Box<dyn KvStore>, ImportError> {
        match config.backend {
            StoreBackend::Wrangler => Ok(Box::new(WranglerStore::from_config(config))),
            StoreBackend::Cloudflare => Ok(Box::new(CloudflareStore::new(config)?)),
            StoreBackend::Memory => Ok(Box::new(MemoryStore::new())),
        }
    }

    /// List all available backend names
    pub fn available_backends() -> Vec<&'static str> {
        vec!["wrangler", "cloudflare", "memory"]
    }
}
