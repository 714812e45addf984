//! Configuration loading for PhiloLogic.
//! Reads philologic.toml from the current directory or the path in PHILOLOGIC_CONFIG.
//! Every field has a default, so the server also starts with no file at all.

use philologic_common::{PhiloError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Sessions untouched for this long are dropped with their flashcards.
    #[serde(default = "default_session_idle_minutes")]
    pub session_idle_minutes: u64,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 5001 }
fn default_static_dir() -> String { "static".to_string() }
fn default_session_idle_minutes() -> u64 { 60 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            session_idle_minutes: default_session_idle_minutes(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Builtin,
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_source")]
    pub source: CatalogKind,
    /// Required when `source = "remote"`.
    pub base_url: Option<String>,
}

fn default_catalog_source() -> CatalogKind { CatalogKind::Builtin }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { source: default_catalog_source(), base_url: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    Mock,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_generation_backend")]
    pub backend: GenerationKind,
    /// Simulated latency of the mock answer backend.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
    /// Simulated latency before a flashcard batch is produced.
    #[serde(default = "default_flashcard_delay_ms")]
    pub flashcard_delay_ms: u64,
    /// Ask the answer backend to write each flashcard's answer.
    #[serde(default)]
    pub answer_flashcards: bool,
    pub http: Option<HttpBackendConfig>,
}

fn default_generation_backend() -> GenerationKind { GenerationKind::Mock }
fn default_mock_delay_ms()      -> u64 { 2000 }
fn default_flashcard_delay_ms() -> u64 { 3000 }

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            backend: default_generation_backend(),
            mock_delay_ms: default_mock_delay_ms(),
            flashcard_delay_ms: default_flashcard_delay_ms(),
            answer_flashcards: false,
            http: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpBackendConfig {
    #[serde(default = "default_http_base_url")]
    pub base_url: String,
    #[serde(default = "default_http_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: String,
}

fn default_http_base_url() -> String { "http://localhost:11434".to_string() }
fn default_http_model()    -> String { "llama3:8b".to_string() }

mod tests;

impl Config {
    /// Load configuration from philologic.toml.
    /// Checks PHILOLOGIC_CONFIG env var first, then current directory.
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("PHILOLOGIC_CONFIG")
            .unwrap_or_else(|_| "philologic.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml(&content)?
        } else {
            tracing::info!("No config file at {}; using defaults", path);
            Config::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply PHILOLOGIC_HOST, PHILOLOGIC_PORT and PHILOLOGIC_API_KEY.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(host) = lookup("PHILOLOGIC_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PHILOLOGIC_PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                PhiloError::Config(format!("PHILOLOGIC_PORT must be a valid port number, got {:?}", port))
            })?;
        }
        if let Some(key) = lookup("PHILOLOGIC_API_KEY") {
            self.generation
                .http
                .get_or_insert_with(|| HttpBackendConfig {
                    base_url: default_http_base_url(),
                    model: default_http_model(),
                    api_key: String::new(),
                })
                .api_key = key;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.source == CatalogKind::Remote && self.catalog.base_url.is_none() {
            return Err(PhiloError::Config(
                "catalog.base_url is required when catalog.source = \"remote\"".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
