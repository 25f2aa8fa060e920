//! Configuration loading and management

use anyhow::{Context, Result};
use creator_studio_domain::usecases::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub posts: PostsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_true")]
    pub cors_permissive: bool,
}

/// Which document store backs post persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    #[serde(default = "default_database_name")]
    pub database_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsConfig {
    #[serde(default = "default_list_limit")]
    pub default_limit: usize,

    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./creator_studio.sqlite")
}

fn default_database_name() -> String {
    "creator_studio".to_string()
}

fn default_list_limit() -> usize {
    50
}

fn default_max_limit() -> usize {
    500
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_permissive: default_true(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_path: default_database_path(),
            database_name: default_database_name(),
        }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            default_limit: default_list_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl PostsConfig {
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }
}

impl StorageConfig {
    /// Human-readable location of the store, shown by the status endpoint
    pub fn database_url(&self) -> String {
        match self.backend {
            StorageBackend::Sqlite => format!("sqlite://{}", self.database_path.display()),
            StorageBackend::Memory => "memory://".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CREATOR_STUDIO")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# creator-studio configuration

[general]
log_level = "info"

[server]
host = "0.0.0.0"
port = 8000
# Allow requests from any origin
cors_permissive = true

[storage]
backend = "sqlite"  # sqlite, memory
database_path = "./creator_studio.sqlite"
database_name = "creator_studio"

[posts]
default_limit = 50
max_limit = 500
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_toml_parses_to_defaults() {
        let parsed: AppConfig = toml::from_str(&AppConfig::example_toml()).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(parsed.server.port, defaults.server.port);
        assert_eq!(parsed.server.host, defaults.server.host);
        assert_eq!(parsed.storage.backend, StorageBackend::Sqlite);
        assert_eq!(parsed.storage.database_path, defaults.storage.database_path);
        assert_eq!(parsed.posts.default_limit, 50);
        assert_eq!(parsed.posts.max_limit, 500);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: AppConfig = toml::from_str("[storage]\nbackend = \"memory\"\n").unwrap();
        assert_eq!(parsed.storage.backend, StorageBackend::Memory);
        assert_eq!(parsed.storage.database_name, "creator_studio");
        assert_eq!(parsed.server.port, 8000);
        assert!(parsed.server.cors_permissive);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/creator.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_database_url() {
        let mut storage = StorageConfig::default();
        assert_eq!(storage.database_url(), "sqlite://./creator_studio.sqlite");
        storage.backend = StorageBackend::Memory;
        assert_eq!(storage.database_url(), "memory://");
    }
}
