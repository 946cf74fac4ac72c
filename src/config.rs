use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,

    // Storage
    pub db_path: String,

    // Lexicons
    pub slang_path: String,
    pub slang_has_header: bool,
    pub profanity_path: String,
    pub profanity_column: String,
    pub lexicon_encoding: String,

    // Uploads
    pub upload_encoding: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_bytes: 10 * 1024 * 1024,
            db_path: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tweetclean/tweets.db")
                .to_string_lossy()
                .to_string(),
            slang_path: "new_kamusalay.csv".to_string(),
            slang_has_header: false,
            profanity_path: "abusive.csv".to_string(),
            profanity_column: "ABUSIVE".to_string(),
            lexicon_encoding: "latin-1".to_string(),
            upload_encoding: "iso-8859-1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, or fall back to defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Backup corrupt file for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tweetclean")
        .join("config.json")
}
