// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-deploy gate.
//!
//! Runs once per rendered artifact before a build, deploy or stage command
//! completes. Depending on `raise_error` it fails on the first blacklisted
//! term or warns about every one and lets the command continue.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use super::{Finding, RenderedDocument, TracingSink, WarningSink};
use crate::error::{Error, Result};
use crate::extension::Blacklist;
use crate::scanner::{first_match, scan};

/// Hook run on rendered artifacts before they ship.
#[derive(Debug, Clone)]
pub struct PreDeployGate<W = TracingSink> {
    blacklist: Arc<Blacklist>,
    sink: W,
}

impl PreDeployGate<TracingSink> {
    pub fn new(blacklist: Arc<Blacklist>) -> Self {
        Self::with_sink(blacklist, TracingSink)
    }
}

impl<W: WarningSink> PreDeployGate<W> {
    /// Create a gate that reports warnings to `sink`.
    pub fn with_sink(blacklist: Arc<Blacklist>, sink: W) -> Self {
        Self { blacklist, sink }
    }

    /// Check one rendered artifact for `command`.
    ///
    /// Returns `previous` unchanged unless a violation must fail the command.
    /// The document is only read when the blacklist is non-empty and both the
    /// command and the path extension are configured.
    pub fn trigger<T, D>(&self, previous: T, doc: &D, command: &str) -> Result<T>
    where
        D: RenderedDocument + ?Sized,
    {
        if self.blacklist.is_empty() {
            return Ok(previous);
        }
        if !self.blacklist.handles_command(command) {
            debug!(command, "pre-deploy: command not configured");
            return Ok(previous);
        }
        if !self.blacklist.applies_to_path(doc.path()) {
            debug!(path = doc.path(), "pre-deploy: extension not configured");
            return Ok(previous);
        }

        let content = doc.read().map_err(|source| Error::Io {
            path: PathBuf::from(doc.path()),
            source,
        })?;

        if self.blacklist.raise_error() {
            if let Some(found) = first_match(self.blacklist.terms(), &content) {
                return Err(Error::Blacklisted(Finding::new(doc.path(), found)));
            }
        } else {
            for found in scan(self.blacklist.terms(), &content) {
                self.sink.warning(&Finding::new(doc.path(), found));
            }
        }

        Ok(previous)
    }
}

#[cfg(test)]
#[path = "pre_deploy_tests.rs"]
mod tests;
