// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled blacklist state and the extension that hands out hooks.
//!
//! Configuration is compiled once by [`Blacklist::configure`] and never
//! mutated afterwards, so gates can share it across threads.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::BlacklistConfig;
use crate::error::Result;
use crate::hooks::{HookKind, PostRenderGate, PreDeployGate, WarningSink};
use crate::terms::{TermEntry, compile_terms};

/// Immutable, compiled blacklist settings.
#[derive(Debug)]
pub struct Blacklist {
    terms: Vec<TermEntry>,
    commands: BTreeSet<String>,
    extensions: Vec<String>,
    raise_error: bool,
}

impl Blacklist {
    /// Compile raw configuration. Invalid terms are config errors.
    pub fn configure(config: &BlacklistConfig) -> Result<Self> {
        Ok(Self {
            terms: compile_terms(&config.blacklist)?,
            commands: config.commands.iter().cloned().collect(),
            extensions: config.extensions.clone(),
            raise_error: config.raise_error,
        })
    }

    pub fn terms(&self) -> &[TermEntry] {
        &self.terms
    }

    /// No terms configured: every gate passes through.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn raise_error(&self) -> bool {
        self.raise_error
    }

    /// Whether `path` ends with one of the configured extension suffixes.
    pub fn applies_to_path(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }

    /// Whether the pre-deploy gate runs for `command`.
    pub fn handles_command(&self, command: &str) -> bool {
        self.commands.contains(command)
    }
}

/// Blacklist extension: shared compiled state plus its hooks.
#[derive(Debug, Clone)]
pub struct BlacklistExtension {
    blacklist: Arc<Blacklist>,
}

impl BlacklistExtension {
    pub fn new(config: &BlacklistConfig) -> Result<Self> {
        Ok(Self {
            blacklist: Arc::new(Blacklist::configure(config)?),
        })
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Hook kinds the host may register this extension for.
    pub fn available_hooks(&self) -> &'static [HookKind] {
        HookKind::ALL
    }

    pub fn post_render(&self) -> PostRenderGate {
        PostRenderGate::new(Arc::clone(&self.blacklist))
    }

    /// Pre-deploy gate that logs warnings through `tracing`.
    pub fn pre_deploy(&self) -> PreDeployGate {
        PreDeployGate::new(Arc::clone(&self.blacklist))
    }

    /// Pre-deploy gate that reports warnings to a host-provided sink.
    pub fn pre_deploy_with<W: WarningSink>(&self, sink: W) -> PreDeployGate<W> {
        PreDeployGate::with_sink(Arc::clone(&self.blacklist), sink)
    }
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
