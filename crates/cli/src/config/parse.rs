// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use super::suggest::suggest_key;
use crate::error::Error;

/// Build a config error tied to `path`.
pub(super) fn config_error(message: String, path: &Path) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

/// Read the required `version` key.
pub(super) fn version_of(table: &toml::Table, path: &Path) -> Result<i64, Error> {
    match table.get("version") {
        Some(toml::Value::Integer(v)) => Ok(*v),
        Some(other) => Err(config_error(
            format!("version must be an integer, found {}", other.type_str()),
            path,
        )),
        None => Err(config_error(
            "missing required field: version".to_string(),
            path,
        )),
    }
}

/// Warn about unknown configuration key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    match suggest_key(key) {
        Some(suggested) => eprintln!(
            "blacklist: warning: {}: unrecognized field `{}` (ignored). Did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "blacklist: warning: {}: unrecognized field `{}` (ignored)",
            path.display(),
            key
        ),
    }
}
