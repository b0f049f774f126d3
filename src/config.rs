// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Fintrack", "fintrack"));

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const API_URL_ENV: &str = "FINTRACK_API_URL";
pub const TIMEOUT_ENV: &str = "FINTRACK_TIMEOUT_SECS";

/// Effective settings for the shared HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub headers: BTreeMap<String, String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// On-disk shape; anything left out keeps its default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    #[serde(default)]
    headers: BTreeMap<String, String>,
    timeout_secs: Option<u64>,
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .ok_or_else(|| Error::Config("Could not determine platform-specific config dir".into()))?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    /// Defaults, then the user's config file, then environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&config_path()?)?;
        cfg.apply_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(TIMEOUT_ENV).ok(),
        )?;
        Ok(cfg)
    }

    /// Defaults merged with `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut cfg = Self::default();
        if !path.exists() {
            return Ok(cfg);
        }
        let raw = fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        if let Some(url) = file.base_url {
            cfg.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            cfg.timeout_secs = positive_timeout(secs)?;
        }
        cfg.headers.extend(file.headers);
        Ok(cfg)
    }

    pub fn apply_overrides(
        &mut self,
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<()> {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = timeout_secs.filter(|t| !t.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("Invalid timeout '{}'", raw)))?;
            self.timeout_secs = positive_timeout(secs)?;
        }
        Ok(())
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

// reqwest treats a zero timeout as already expired.
fn positive_timeout(secs: u64) -> Result<u64> {
    if secs == 0 {
        return Err(Error::Config("timeout must be > 0".into()));
    }
    Ok(secs)
}
