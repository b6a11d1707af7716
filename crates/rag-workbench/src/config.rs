//! Configuration for the workbench client

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the RAG service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP timeout for backend requests in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retrieval parameter defaults applied at startup
    #[serde(default)]
    pub retrieval: RetrievalDefaults,
}

/// Startup defaults for the retrieval parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalDefaults {
    /// Number of chunks to retrieve per search/ask (default: 4)
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Sampling temperature for answer generation (default: 0.1)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String { "http://127.0.0.1:8000".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_top_k() -> usize { 4 }
fn default_temperature() -> f32 { 0.1 }

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            retrieval: RetrievalDefaults::default(),
        }
    }
}

impl Default for RetrievalDefaults {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            temperature: default_temperature(),
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from TOML; absent fields fall back to defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::config(format!("invalid config: {e}")))
    }

    /// Base URL with any trailing slash removed
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
