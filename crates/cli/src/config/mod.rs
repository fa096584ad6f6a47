// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! `logrdr.toml` is optional; every field has a default. Unknown keys are
//! rejected so typos surface as errors instead of silently falling back.

pub mod defaults;

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors loading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version.
    #[serde(default = "Config::default_version")]
    pub version: i64,

    #[serde(default)]
    pub reader: ReaderConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            reader: ReaderConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    fn default_version() -> i64 {
        defaults::VERSION
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.version != defaults::VERSION {
            return Err(format!(
                "unsupported version {} (expected {})",
                self.version,
                defaults::VERSION
            ));
        }
        self.store.validate()
    }
}

/// `[reader]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// Maximum line length in bytes; 0 disables truncation.
    pub max_line_length: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_line_length: defaults::reader::MAX_LINE_LENGTH,
        }
    }
}

/// `[store]` section: storage tuning policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Page size in bytes; power of two between 512 and 65536.
    pub page_size: u64,

    /// Cache budget is at most `total_memory / memory_divisor`.
    pub memory_divisor: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::store::PAGE_SIZE,
            memory_divisor: defaults::store::MEMORY_DIVISOR,
        }
    }
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        let range = defaults::store::MIN_PAGE_SIZE..=defaults::store::MAX_PAGE_SIZE;
        if !self.page_size.is_power_of_two() || !range.contains(&self.page_size) {
            return Err(format!(
                "store.page_size must be a power of two between {} and {}, got {}",
                defaults::store::MIN_PAGE_SIZE,
                defaults::store::MAX_PAGE_SIZE,
                self.page_size
            ));
        }
        if self.memory_divisor == 0 {
            return Err("store.memory_divisor must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Parse and validate config text. `path` is only used in messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate().map_err(|message| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(config)
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
