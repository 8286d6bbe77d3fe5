// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! blacklist: FAIL
//!   <path>: blacklisted term `<term>`
//!     <snippet>
//! ```
//!
//! Warn-only findings use the same layout under `blacklist: WARN`.
//! Nothing is printed when the run is clean.

use std::io::Write;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::Report;
use crate::color::scheme;
use crate::hooks::Finding;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write warnings, then the violation if there is one.
    pub fn write_report(&mut self, report: &Report) -> std::io::Result<()> {
        if !report.warnings.is_empty() {
            self.write_header(&scheme::warn(), "WARN")?;
            for finding in &report.warnings {
                self.write_finding(finding)?;
            }
        }

        if let Some(ref violation) = report.violation {
            self.write_header(&scheme::fail(), "FAIL")?;
            self.write_finding(violation)?;
        }

        self.out.flush()
    }

    fn write_header(&mut self, status_color: &ColorSpec, status: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::check_name())?;
        write!(self.out, "blacklist")?;
        self.out.reset()?;

        write!(self.out, ": ")?;
        self.out.set_color(status_color)?;
        write!(self.out, "{}", status)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_finding(&mut self, finding: &Finding) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", finding.path)?;
        self.out.reset()?;

        write!(self.out, ": blacklisted term `")?;
        self.out.set_color(&scheme::term())?;
        write!(self.out, "{}", finding.term)?;
        self.out.reset()?;
        writeln!(self.out, "`")?;

        self.out.set_color(&scheme::snippet())?;
        for line in finding.snippet.lines() {
            writeln!(self.out, "    {}", line)?;
        }
        self.out.reset()
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
