// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles blacklist.toml parsing with version validation and unknown key warnings.

mod parse;
mod suggest;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discovery;
use crate::error::{Error, Result};
use parse::{config_error, version_of, warn_unknown_key};

/// Raw extension settings, as a host supplies them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlacklistConfig {
    /// Terms to block, each a case-insensitive regex (default: none).
    #[serde(default)]
    pub blacklist: Vec<String>,

    /// Commands the pre-deploy gate runs for (default: build, deploy, stage).
    #[serde(default = "BlacklistConfig::default_commands")]
    pub commands: Vec<String>,

    /// Output path suffixes to scan (default: .html).
    #[serde(default = "BlacklistConfig::default_extensions")]
    pub extensions: Vec<String>,

    /// Fail on a pre-deploy match instead of warning (default: true).
    #[serde(default = "BlacklistConfig::default_raise_error")]
    pub raise_error: bool,
}

impl Default for BlacklistConfig {
    fn default() -> Self {
        Self {
            blacklist: Vec::new(),
            commands: Self::default_commands(),
            extensions: Self::default_extensions(),
            raise_error: Self::default_raise_error(),
        }
    }
}

impl BlacklistConfig {
    pub(crate) fn default_commands() -> Vec<String> {
        vec![
            "build".to_string(),
            "deploy".to_string(),
            "stage".to_string(),
        ]
    }

    pub(crate) fn default_extensions() -> Vec<String> {
        vec![".html".to_string()]
    }

    pub(crate) fn default_raise_error() -> bool {
        true
    }
}

/// Full configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Extension settings.
    pub blacklist: BlacklistConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            blacklist: BlacklistConfig::default(),
        }
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
pub(crate) const KNOWN_KEYS: &[&str] = &[
    "version",
    "blacklist",
    "commands",
    "extensions",
    "raise_error",
];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Resolve the config file from an explicit path or discovery, then load it.
///
/// Falls back to defaults (empty blacklist) when no file is found. The path
/// that was loaded is returned alongside the config.
pub fn resolve_and_load(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, Option<PathBuf>)> {
    match discovery::resolve_config(explicit, cwd)? {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Ok((load_with_warnings(&path)?, Some(path)))
        }
        None => {
            debug!("no config file found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let mut table = parse_table(content, path)?;

    let unknown_keys: Vec<String> = table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    for key in &unknown_keys {
        warn_unknown_key(path, key);
        table.remove(key);
    }

    from_table(table, path)
}

/// Parse TOML and validate the version before anything else.
fn parse_table(content: &str, path: &Path) -> Result<toml::Table> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    let version = version_of(&table, path)?;
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade blacklist to use this config.",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }

    Ok(table)
}

fn from_table(mut table: toml::Table, path: &Path) -> Result<Config> {
    let version = version_of(&table, path)?;
    table.remove("version");

    let blacklist: BlacklistConfig = toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| config_error(e.to_string(), path))?;

    Ok(Config { version, blacklist })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
