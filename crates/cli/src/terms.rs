// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blacklist term compilation.
//!
//! Every configured term is a regular expression, matched case-insensitively.
//! Terms that should match literally must escape regex metacharacters.

use regex::{Match, Regex, RegexBuilder};

/// A configured term paired with its compiled pattern.
#[derive(Debug, Clone)]
pub struct TermEntry {
    term: String,
    pattern: Regex,
}

/// Error during term compilation.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("invalid blacklist term `{term}`: {source}")]
    InvalidRegex {
        term: String,
        #[source]
        source: regex::Error,
    },
}

impl TermEntry {
    /// Compile a raw term into a case-insensitive pattern.
    pub fn compile(term: &str) -> Result<Self, TermError> {
        let pattern = RegexBuilder::new(term)
            .case_insensitive(true)
            .build()
            .map_err(|source| TermError::InvalidRegex {
                term: term.to_string(),
                source,
            })?;
        Ok(Self {
            term: term.to_string(),
            pattern,
        })
    }

    /// The term as written in configuration.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Leftmost match of this term in `content`.
    pub fn find<'c>(&self, content: &'c str) -> Option<Match<'c>> {
        self.pattern.find(content)
    }
}

/// Compile raw terms, preserving configuration order.
///
/// The first invalid term aborts compilation.
pub fn compile_terms<S: AsRef<str>>(terms: &[S]) -> Result<Vec<TermEntry>, TermError> {
    terms
        .iter()
        .map(|term| TermEntry::compile(term.as_ref()))
        .collect()
}

#[cfg(test)]
#[path = "terms_tests.rs"]
mod tests;
