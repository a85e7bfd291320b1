use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Vendor update-check endpoint queried when no `base_url` is supplied.
pub const DEFAULT_UPDATE_URL: &str =
    "https://app-updates.agilebits.com/check/1/13.0.0/OPM4/en/400600";

/// Source label selected when no `source` is supplied.
pub const DEFAULT_SOURCE: &str = "Amazon CloudFront";

/// Transport tuning (optional `[http]` section in config.toml).
///
/// Unset values leave libcurl's own defaults in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Global configuration loaded from `~/.config/opurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Manifest endpoint used when the caller gives none.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Source label used when the caller gives none.
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

fn default_base_url() -> String {
    DEFAULT_UPDATE_URL.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            source: default_source(),
            http: None,
        }
    }
}

impl ProviderConfig {
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("opurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Parse a config file at `path`.
pub fn load_from(path: &Path) -> Result<ProviderConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ProviderConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProviderConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProviderConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
