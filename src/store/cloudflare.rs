use crate::config::StoreConfig;
use crate::error::ImportError;
use crate::store::KvStore;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

/// Writes through the Cloudflare KV REST API.
pub struct CloudflareStore {
    client: Client,
    api_base_url: String,
    account_id: String,
    namespace_id: String,
    api_token: String,
}

impl CloudflareStore {
    /// Create a store from configuration
    ///
    /// The account id and token fall back to `CLOUDFLARE_ACCOUNT_ID` and
    /// `CLOUDFLARE_API_TOKEN`.
    pub fn new(config: &StoreConfig) -> Result<Self, ImportError> {
        let account_id = config
            .account_id
            .clone()
            .or_else(|| std::env::var("CLOUDFLARE_ACCOUNT_ID").ok())
            .ok_or(ImportError::MissingSetting("store.account_id"))?;

        let api_token = config
            .api_token
            .clone()
            .or_else(|| std::env::var("CLOUDFLARE_API_TOKEN").ok())
            .ok_or(ImportError::MissingSetting("store.api_token"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(CloudflareStore {
            client,
            api_base_url: config.api_base_url.clone(),
            account_id,
            namespace_id: config.namespace_id.clone(),
            api_token,
        })
    }

    fn value_url(&self, key: &str) -> Result<Url, ImportError> {
        let mut url = Url::parse(&self.api_base_url)
            .map_err(|e| ImportError::InvalidUrl(format!("{}: {e}", self.api_base_url)))?;

        url.path_segments_mut()
            .map_err(|_| ImportError::InvalidUrl(self.api_base_url.clone()))?
            .pop_if_empty()
            .extend([
                "accounts",
                self.account_id.as_str(),
                "storage",
                "kv",
                "namespaces",
                self.namespace_id.as_str(),
                "values",
                key,
            ]);

        Ok(url)
    }
}

#[async_trait]
impl KvStore for CloudflareStore {
    fn store_name(&self) -> &str {
        "cloudflare"
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), ImportError> {
        let url = self.value_url(key)?;
        debug!("PUT {}", url);

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.api_token)
            .body(value.to_string())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ImportError::StoreRejected {
            status: status.as_u16(),
            body,
        })
    }
}
