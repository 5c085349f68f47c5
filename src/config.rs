use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level configuration for an import run
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ImportConfig {
    /// Where recipes get written
    #[serde(default)]
    pub store: StoreConfig,
}

/// Which key-value backend receives the recipes
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Shell out to `wrangler kv key put`
    #[default]
    Wrangler,
    /// Call the Cloudflare KV REST API directly
    Cloudflare,
    /// Keep everything in memory (dry run)
    Memory,
}

/// Settings for the store backends
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// KV namespace every recipe is written to
    #[serde(default = "default_namespace_id")]
    pub namespace_id: String,
    /// Program used to launch wrangler (`npx` unless wrangler is installed globally)
    #[serde(default = "default_wrangler_command")]
    pub wrangler_command: String,
    /// Pass `--remote` to wrangler so writes skip local dev storage
    #[serde(default)]
    pub remote: bool,
    /// Cloudflare account id (falls back to CLOUDFLARE_ACCOUNT_ID)
    pub account_id: Option<String>,
    /// API token with KV write access (falls back to CLOUDFLARE_API_TOKEN)
    pub api_token: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            namespace_id: default_namespace_id(),
            wrangler_command: default_wrangler_command(),
            remote: false,
            account_id: None,
            api_token: None,
            api_base_url: default_api_base_url(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_namespace_id() -> String {
    "PLANNER_KV".to_string()
}

fn default_wrangler_command() -> String {
    "npx".to_string()
}

fn default_api_base_url() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PAPRIKA_KV__ prefix
    /// 2. paprika-kv.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PAPRIKA_KV__STORE__NAMESPACE_ID
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ImportConfig::load`] for the precedence rules.
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("paprika-kv").required(false))
        // Use double underscore for nested: PAPRIKA_KV__STORE__BACKEND
        .add_source(
            Environment::with_prefix("PAPRIKA_KV")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
