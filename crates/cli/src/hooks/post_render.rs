// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Post-render gate.
//!
//! Scans a document's output right after rendering and aborts the render on
//! the first blacklisted term. There is no warn-only mode at this point.

use std::sync::Arc;

use tracing::debug;

use super::{Document, Finding};
use crate::error::{Error, Result};
use crate::extension::Blacklist;
use crate::scanner::first_match;

/// Hook run on freshly rendered content.
#[derive(Debug, Clone)]
pub struct PostRenderGate {
    blacklist: Arc<Blacklist>,
}

impl PostRenderGate {
    pub fn new(blacklist: Arc<Blacklist>) -> Self {
        Self { blacklist }
    }

    /// Check rendered output.
    ///
    /// `previous` is the output of earlier post-render hooks; when it is
    /// empty the raw rendered content is scanned instead. Documents that are
    /// not renderable, or whose view has no configured extension, get
    /// `previous` back untouched.
    pub fn trigger<D>(&self, previous: String, doc: &D, raw_content: &str) -> Result<String>
    where
        D: Document + ?Sized,
    {
        if !doc.is_renderable() {
            debug!(view = doc.view(), "post-render: not a renderable document");
            return Ok(previous);
        }
        if !self.blacklist.applies_to_path(doc.view()) {
            debug!(view = doc.view(), "post-render: extension not configured");
            return Ok(previous);
        }

        let content = if previous.is_empty() {
            raw_content.to_string()
        } else {
            previous
        };

        if let Some(found) = first_match(self.blacklist.terms(), &content) {
            return Err(Error::Blacklisted(Finding::new(doc.view(), found)));
        }

        Ok(content)
    }
}

#[cfg(test)]
#[path = "post_render_tests.rs"]
mod tests;
