use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Secret shared with the identity provider that signs bearer tokens.
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Filesystem,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// S3 bucket name. Also used to derive the default public URL when no
    /// `public_base_url` is configured.
    pub bucket: String,
    pub region: String,
    /// Custom S3 endpoint (MinIO etc.). Enables path-style addressing.
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Base URL prepended to storage keys when building public photo URLs.
    pub public_base_url: Option<String>,
    /// Root directory for the `filesystem` backend.
    pub root: String,
    /// Maximum accepted photo size in bytes.
    pub max_upload_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("storage.backend", "filesystem")?
            .set_default("storage.bucket", "photos")?
            .set_default("storage.region", "us-east-1")?
            .set_default("storage.root", "./data/photos")?
            .set_default("storage.max_upload_size", 32 * 1024 * 1024)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., PHOTOSTREAM__AUTH__JWT_SECRET)
            .add_source(Environment::with_prefix("PHOTOSTREAM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
