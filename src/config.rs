use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Used when neither the environment nor the config file names an API
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment override for the API base URL
pub const API_URL_ENV: &str = "QCEX_API";

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    /// Returns the config directory path (~/.config/qcex on Linux)
    fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("qcex"))
            .context("Could not determine config directory")
    }

    /// Returns the config file path
    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        Self::parse(&contents).with_context(|| format!("Failed to parse config file {path:?}"))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// API base URL: environment, then config file, then the local default
    pub fn api_url(&self, env_override: Option<&str>) -> String {
        env_override
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.api_url
                    .as_deref()
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
            })
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }

    /// Resolve the API base URL for this process, reading the environment once
    pub fn resolve_api_url(&self) -> String {
        let env = std::env::var(API_URL_ENV).ok();
        self.api_url(env.as_deref())
    }
}
