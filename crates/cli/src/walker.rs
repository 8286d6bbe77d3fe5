// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendered artifact discovery.
//!
//! Uses the `ignore` crate to walk a build output directory. Everything in
//! the output ships, so ignore files and hidden entries do not filter
//! artifacts; only `.git` is skipped. Artifacts come back sorted by path so
//! the first violation reported is stable across runs.

use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::hooks::RenderedDocument;

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories to skip entirely during walking.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &[".git"];

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

/// Statistics from a walk operation.
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Total files discovered.
    pub files_found: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// A rendered file on disk, addressed by its site path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Site path: `/`-separated, relative to the walk root, with a leading `/`.
    path: String,
    file: PathBuf,
}

impl Artifact {
    pub fn new(path: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: file.into(),
        }
    }

    /// Location on disk.
    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl RenderedDocument for Artifact {
    fn path(&self) -> &str {
        &self.path
    }

    /// Invalid UTF-8 is replaced rather than failing the whole run.
    fn read(&self) -> std::io::Result<String> {
        let bytes = std::fs::read(&self.file)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Site path for `file` under `root`.
pub fn site_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    // Walking a single file: strip_prefix leaves nothing.
    if parts.is_empty()
        && let Some(name) = file.file_name()
    {
        parts.push(name.to_string_lossy().into_owned());
    }

    format!("/{}", parts.join("/"))
}

/// Sequential walker over rendered output.
pub struct ArtifactWalker {
    config: WalkerConfig,
}

impl ArtifactWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Collect every file under `root`, sorted by path.
    pub fn walk(&self, root: &Path) -> Result<(Vec<Artifact>, WalkStats)> {
        if !root.exists() {
            return Err(Error::Walk {
                message: format!("path not found: {}", root.display()),
            });
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(true)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| SKIP_DIRECTORIES.contains(&name)))
            });

        let mut stats = WalkStats::default();
        let mut artifacts = Vec::new();

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    stats.files_found += 1;
                    let path = site_path(root, entry.path());
                    artifacts.push(Artifact::new(path, entry.into_path()));
                }
                Err(err) => {
                    if is_loop_error(&err) {
                        stats.symlink_loops += 1;
                    } else {
                        stats.errors += 1;
                    }
                    debug!("walk error: {}", err);
                }
            }
        }

        Ok((artifacts, stats))
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
