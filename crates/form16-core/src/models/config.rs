//! Configuration structures for the extraction service.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Form16Error, Result};

/// Main configuration for form16.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Form16Config {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,

    /// Attach a permissive CORS layer.
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_upload_bytes: 10 * 1024 * 1024,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Retry encrypted documents with the empty user password.
    pub decrypt_with_empty_password: bool,

    /// Minimum text length to consider a PDF as text-based.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_with_empty_password: true,
            min_text_length: 50,
        }
    }
}

impl Form16Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Form16Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Form16Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
