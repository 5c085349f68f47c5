mod cloudflare;
mod factory;
mod memory;
mod wrangler;

pub use cloudflare::CloudflareStore;
pub use factory::StoreFactory;
pub use memory::MemoryStore;
pub use wrangler::WranglerStore;

use crate::error::ImportError;
use async_trait::async_trait;
use std::sync::Arc;

/// A key-value namespace recipes can be written to
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Backend name (e.g., "wrangler", "cloudflare")
    fn store_name(&self) -> &str;

    /// Write `value` under `key`, replacing whatever was there.
    ///
    /// `Ok` means the backend acknowledged the write.
    async fn put(&self, key: &str, value: &str) -> Result<(), ImportError>;
}

#[async_trait]
impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn store_name(&self) -> &str {
        (**self).store_name()
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), ImportError> {
        (**self).put(key, value).await
    }
}
