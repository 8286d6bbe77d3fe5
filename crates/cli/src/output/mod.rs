// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for gate results.

pub mod json;
pub mod text;

use crate::hooks::Finding;

/// Outcome of running the pre-deploy gate over a directory of artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Command the gate ran for.
    pub command: String,
    /// Artifacts handed to the gate.
    pub documents: usize,
    /// The violation that stopped the run, if any.
    pub violation: Option<Finding>,
    /// Findings reported in warn-only mode, in discovery then term order.
    pub warnings: Vec<Finding>,
}

impl Report {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            ..Self::default()
        }
    }

    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
