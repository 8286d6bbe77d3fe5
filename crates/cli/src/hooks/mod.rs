// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build hooks that gate rendered content on the blacklist.
//!
//! The host owns the document model. These traits are the only view the
//! gates need of it.

mod post_render;
mod pre_deploy;

use std::cell::RefCell;
use std::fmt;

use serde::Serialize;

use crate::scanner::TermMatch;

pub use post_render::PostRenderGate;
pub use pre_deploy::PreDeployGate;

/// The named hook points a blacklist extension can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Runs right after a document is rendered, before it is written.
    PostRender,
    /// Runs per rendered artifact before a build, deploy or stage completes.
    PreDeploy,
}

impl HookKind {
    /// Every hook kind, in lifecycle order.
    pub const ALL: &'static [HookKind] = &[HookKind::PostRender, HookKind::PreDeploy];

    pub fn name(self) -> &'static str {
        match self {
            HookKind::PostRender => "post_render",
            HookKind::PreDeploy => "pre_deploy",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A document as seen by the post-render hook.
pub trait Document {
    /// Output path (view) the document renders to.
    fn view(&self) -> &str;

    /// Whether this is a concrete renderable document rather than some other artifact.
    fn is_renderable(&self) -> bool;
}

/// A rendered artifact as seen by the pre-deploy hook.
pub trait RenderedDocument {
    fn path(&self) -> &str;

    /// Read the final rendered text.
    fn read(&self) -> std::io::Result<String>;
}

/// Receives findings when the blacklist only warns.
pub trait WarningSink {
    fn warning(&self, finding: &Finding);
}

impl<W: WarningSink + ?Sized> WarningSink for &W {
    fn warning(&self, finding: &Finding) {
        (**self).warning(finding)
    }
}

/// Default sink: forwards warnings to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warning(&self, finding: &Finding) {
        tracing::warn!("{}", finding.warning_message());
    }
}

/// Sink that keeps findings for the host to report later.
#[derive(Debug, Default)]
pub struct CollectingSink {
    findings: RefCell<Vec<Finding>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings received so far, in arrival order.
    pub fn findings(&self) -> Vec<Finding> {
        self.findings.borrow().clone()
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings.into_inner()
    }
}

impl WarningSink for CollectingSink {
    fn warning(&self, finding: &Finding) {
        self.findings.borrow_mut().push(finding.clone());
    }
}

/// A blacklisted term located in a specific document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: String,
    pub term: String,
    pub snippet: String,
}

impl Finding {
    pub fn new(path: &str, found: TermMatch) -> Self {
        Self {
            path: path.to_string(),
            term: found.term,
            snippet: found.snippet,
        }
    }

    /// Message logged when the finding does not fail the build.
    pub fn warning_message(&self) -> String {
        format!(
            "Blacklist warning term ({}) found in {}: \n{}",
            self.term, self.path, self.snippet
        )
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
