use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::InvalidUrlPolicy;

/// Output format for per-domain counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `domain<TAB>count` line per domain.
    #[default]
    Text,
    /// A single JSON object mapping domain to count.
    Json,
}

/// Global configuration loaded from `~/.config/urlcount/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlCountConfig {
    /// Behaviour for inputs without `"://"`: "abort" (default) or "skip".
    #[serde(default)]
    pub invalid_url_policy: InvalidUrlPolicy,
    /// Default output for `per-tld`: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcount")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlCountConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlCountConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<UrlCountConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlCountConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
