// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blacklist scanning with context snippets.
//!
//! Each term is searched once (leftmost match only). Matches come back in
//! term order, so callers can fail fast on the first entry or report all.

use serde::Serialize;

use crate::terms::TermEntry;

/// Characters of context kept on each side of a match.
pub const SNIPPET_SIZE: usize = 60;

/// A term found in scanned content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermMatch {
    /// The term as configured.
    pub term: String,
    /// Content surrounding the match, clipped to content bounds.
    pub snippet: String,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset where the match ends.
    pub end: usize,
}

/// Scan content for every term, returning matches in term order.
pub fn scan(terms: &[TermEntry], content: &str) -> Vec<TermMatch> {
    terms
        .iter()
        .filter_map(|entry| match_term(entry, content))
        .collect()
}

/// First match by term order. Later terms are not evaluated.
pub fn first_match(terms: &[TermEntry], content: &str) -> Option<TermMatch> {
    terms.iter().find_map(|entry| match_term(entry, content))
}

fn match_term(entry: &TermEntry, content: &str) -> Option<TermMatch> {
    let found = entry.find(content)?;
    let (from, to) = snippet_bounds(content, found.start(), found.end());
    Some(TermMatch {
        term: entry.term().to_string(),
        snippet: content[from..to].to_string(),
        start: found.start(),
        end: found.end(),
    })
}

/// Byte range covering `SNIPPET_SIZE` characters either side of `start..end`.
///
/// Offsets must lie on char boundaries, as regex match offsets do.
fn snippet_bounds(content: &str, start: usize, end: usize) -> (usize, usize) {
    let start = start.min(content.len());
    let end = end.clamp(start, content.len());

    let from = content[..start]
        .char_indices()
        .rev()
        .nth(SNIPPET_SIZE - 1)
        .map_or(0, |(i, _)| i);
    let to = content[end..]
        .char_indices()
        .nth(SNIPPET_SIZE)
        .map_or(content.len(), |(i, _)| end + i);

    (from, to)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
