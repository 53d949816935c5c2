// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use token_lens::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TokenLens";

/// Public gateway used to turn `ipfs://` sources into fetchable URLs when the
/// user has not configured one.
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Base URL of the gateway used to resolve content-addressed sources.
    #[serde(default)]
    pub ipfs_gateway: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            ipfs_gateway: Some(DEFAULT_IPFS_GATEWAY.to_string()),
        }
    }
}

impl Config {
    /// The gateway to use, falling back to the built-in default when the
    /// config file omits or blanks the field.
    pub fn gateway(&self) -> &str {
        match self.ipfs_gateway.as_deref() {
            Some(gateway) if !gateway.trim().is_empty() => gateway,
            _ => DEFAULT_IPFS_GATEWAY,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
