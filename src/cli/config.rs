//! Configuration file support.

use crate::search::{DEFAULT_THRESHOLD, UNIFIED_THRESHOLD};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Data directory holding the database and media files
    pub dir: Option<PathBuf>,

    /// Root directory media paths resolve against
    pub media_root: Option<PathBuf>,

    /// Public URL prefix embedded content uses for media references
    pub media_url: Option<String>,

    /// Minimum score for single-kind search
    pub search_threshold: Option<u8>,

    /// Minimum score for unified cross-kind search
    pub unified_threshold: Option<u8>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Platform data directory (`~/.local/share/jot`)
    /// 4. Current working directory
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("jot")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the media root directory.
    ///
    /// Defaults to `media/` inside the data directory.
    pub fn media_root(&self, data_dir: &Path) -> PathBuf {
        self.media_root
            .clone()
            .unwrap_or_else(|| data_dir.join("media"))
    }

    /// Resolve the public media URL prefix.
    pub fn media_url(&self) -> String {
        self.media_url.clone().unwrap_or_else(|| "/media/".to_string())
    }

    /// Resolve the single-kind search threshold.
    pub fn search_threshold(&self) -> u8 {
        self.search_threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Resolve the unified cross-kind search threshold.
    pub fn unified_threshold(&self) -> u8 {
        self.unified_threshold.unwrap_or(UNIFIED_THRESHOLD)
    }
}
