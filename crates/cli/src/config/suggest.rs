// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key name suggestions for config validation.

use super::KNOWN_KEYS;

/// Suggest a known config key for a typo.
pub fn suggest_key(unknown: &str) -> Option<&'static str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    // Common typos and variations
    let suggestion = match unknown {
        // blacklist
        "blacklists" | "terms" | "words" | "blocklist" | "denylist" => Some("blacklist"),
        // commands
        "command" | "cmds" => Some("commands"),
        // extensions
        "extension" | "ext" | "exts" | "suffixes" => Some("extensions"),
        // raise_error
        "raise_errors" | "raise" | "raise-error" | "fail" => Some("raise_error"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Try prefix matching (require at least 3 chars to avoid false positives)
    if unknown.len() >= 3 {
        for &name in KNOWN_KEYS {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
