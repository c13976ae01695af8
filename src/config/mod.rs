// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast queue configuration, including loading and saving
//! it to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, ToastConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep fewer toasts on screen
//! config.max_toasts = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_toasts.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.max_toasts, Some(3));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::toast::{HistoryCapacity, QueueCapacity};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "ToastQueue";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub max_toasts: Option<usize>,
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub history_capacity: Option<usize>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_toasts: Some(MAX_TOASTS),
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
        }
    }
}

impl ToastConfig {
    /// Queue capacity, clamped to the supported range.
    #[must_use]
    pub fn queue_capacity(&self) -> QueueCapacity {
        self.max_toasts.map(QueueCapacity::new).unwrap_or_default()
    }

    /// Delay applied by `show` when no duration is given.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS))
    }

    /// History capacity, clamped to the supported range.
    #[must_use]
    pub fn history_capacity(&self) -> HistoryCapacity {
        self.history_capacity
            .map(HistoryCapacity::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. A file that does not parse yields the defaults.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid config {}: {}", path.display(), err);
            Ok(ToastConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
