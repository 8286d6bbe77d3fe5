// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::Report;
use crate::hooks::Finding;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    passed: bool,
    command: &'a str,
    documents: usize,
    violation: Option<&'a Finding>,
    warnings: &'a [Finding],
}

impl<'a> From<&'a Report> for JsonOutput<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            passed: report.passed(),
            command: &report.command,
            documents: report.documents,
            violation: report.violation.as_ref(),
            warnings: &report.warnings,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, report: &Report) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&JsonOutput::from(report))
            .map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
