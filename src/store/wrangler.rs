use crate::config::StoreConfig;
use crate::error::ImportError;
use crate::store::KvStore;
use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

/// Writes through the `wrangler` CLI, one process per key.
pub struct WranglerStore {
    namespace_id: String,
    command: String,
    remote: bool,
}

impl WranglerStore {
    pub fn new(namespace_id: impl Into<String>) -> Self {
        WranglerStore {
            namespace_id: namespace_id.into(),
            command: "npx".to_string(),
            remote: false,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        WranglerStore {
            namespace_id: config.namespace_id.clone(),
            command: config.wrangler_command.clone(),
            remote: config.remote,
        }
    }

    /// Arguments after the launcher program.
    fn args(&self, key: &str, value: &str) -> Vec<String> {
        let mut args: Vec<String> = ["wrangler", "kv", "key", "put", "--namespace-id"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.push(self.namespace_id.clone());
        if self.remote {
            args.push("--remote".to_string());
        }
        args.push(key.to_string());
        args.push(value.to_string());
        args
    }
}

#[async_trait]
impl KvStore for WranglerStore {
    fn store_name(&self) -> &str {
        "wrangler"
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), ImportError> {
        debug!("Running {} wrangler kv key put for {}", self.command, key);

        let output = Command::new(&self.command)
            .args(self.args(key, value))
            .output()
            .await?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ImportError::CommandFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
