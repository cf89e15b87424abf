// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The API base address can come from four places; highest priority wins:
//!
//! 1. the `--api-url` command line flag
//! 2. the `ICED_GALLERY_API_URL` environment variable
//! 3. the `api_base_url` key in `settings.toml`
//! 4. the built-in default (`http://localhost:3000`)

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// Environment variable overriding the API base address.
pub const API_URL_ENV: &str = "ICED_GALLERY_API_URL";

/// Default API base address when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub language: Option<String>,
    /// Base address of the image-storage API.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Endpoint receiving multipart file uploads and returning a public URL.
    /// Defaults to `{api_base_url}/api/upload` when unset.
    #[serde(default)]
    pub upload_url: Option<String>,
}

impl Config {
    /// Resolves the effective API base address from the CLI flag, the
    /// environment, the config file, and the default, in that order.
    pub fn resolve_api_base_url(&self, cli_url: Option<&str>) -> String {
        if let Some(url) = cli_url {
            return trim_base(url);
        }
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                return trim_base(&url);
            }
        }
        if let Some(url) = &self.api_base_url {
            return trim_base(url);
        }
        DEFAULT_API_BASE_URL.to_string()
    }

    /// Resolves the upload endpoint, deriving it from the API base when the
    /// config does not name one explicitly.
    pub fn resolve_upload_url(&self, api_base_url: &str) -> String {
        match &self.upload_url {
            Some(url) => url.clone(),
            None => format!("{}/api/upload", api_base_url),
        }
    }
}

/// Trailing slashes would double up when joining endpoint paths.
fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
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
