//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default endpoint for the hosted summarization model.
pub const DEFAULT_SUMMARIZATION_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Top-level ComplySummarize configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// Directory where uploaded documents are spooled.
    pub upload_dir: PathBuf,
    /// Bearer token for the summarization API.
    pub api_key: String,
    /// Summarization endpoint URL.
    pub summarization_url: String,
}

impl Config {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let upload_dir = data_dir.as_ref().join("uploads");
        std::fs::create_dir_all(&upload_dir)?;

        let api_key =
            std::env::var("HUGGINGFACE_API_KEY").unwrap_or_else(|_| "hf_demo".to_string());
        let summarization_url = std::env::var("SUMMARIZATION_URL")
            .unwrap_or_else(|_| DEFAULT_SUMMARIZATION_URL.to_string());

        Ok(Self {
            port,
            upload_dir,
            api_key,
            summarization_url,
        })
    }
}
