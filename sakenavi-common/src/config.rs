//! Configuration loading for Sakenavi services
//!
//! Resolution priority per setting:
//! 1. Environment variable (highest priority)
//! 2. TOML config file (`$SAKENAVI_CONFIG`, else the platform config
//!    directory, e.g. `~/.config/sakenavi/sakenavi-fs.toml`)
//! 3. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

/// Default Sakenowa data API endpoint
pub const DEFAULT_SAKENOWA_BASE_URL: &str = "https://muro.sakenowa.com/sakenowa-data/api";

/// Flavor search service configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FsConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Upstream Sakenowa client settings
    pub sakenowa: SakenowaConfig,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5731".to_string(),
            sakenowa: SakenowaConfig::default(),
        }
    }
}

/// Sakenowa data API client settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SakenowaConfig {
    /// Base URL of the Sakenowa data API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Minimum interval between upstream requests in milliseconds
    pub rate_limit_ms: u64,
}

impl Default for SakenowaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SAKENOWA_BASE_URL.to_string(),
            timeout_secs: 30,
            rate_limit_ms: 1000,
        }
    }
}

/// Load service configuration following the resolution priority above
pub fn load_config() -> Result<FsConfig> {
    let mut config = match config_file_path() {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Read config failed: {}", e)))?;
            let parsed: FsConfig = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Parse config failed: {}", e)))?;
            info!("Configuration loaded from {}", path.display());
            parsed
        }
        _ => FsConfig::default(),
    };

    // Environment overrides take priority over the file
    if let Ok(bind) = std::env::var("SAKENAVI_BIND") {
        config.bind_addr = bind;
    }
    if let Ok(url) = std::env::var("SAKENAVI_SAKENOWA_URL") {
        config.sakenowa.base_url = url;
    }

    Ok(config)
}

/// Config file location: `$SAKENAVI_CONFIG` wins, else the platform config dir
fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SAKENAVI_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("sakenavi").join("sakenavi-fs.toml"))
}
