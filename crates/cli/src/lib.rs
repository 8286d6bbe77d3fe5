// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Content gate for static-site builds.
//!
//! Rendered pages are scanned for configured blacklist terms, either right
//! after rendering ([`PostRenderGate`]) or per artifact before a deploy
//! ([`PreDeployGate`]).

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extension;
pub mod hooks;
pub mod output;
pub mod scanner;
pub mod terms;
pub mod walker;

pub use cli::{CheckArgs, Cli, Command, OutputFormat, RenderArgs};
pub use config::{BlacklistConfig, Config};
pub use error::{Error, ExitCode, Result};
pub use extension::{Blacklist, BlacklistExtension};
pub use hooks::{
    CollectingSink, Document, Finding, HookKind, PostRenderGate, PreDeployGate, RenderedDocument,
    TracingSink, WarningSink,
};
pub use scanner::{SNIPPET_SIZE, TermMatch, first_match, scan};
pub use terms::{TermEntry, TermError, compile_terms};
pub use walker::{Artifact, ArtifactWalker, WalkStats, WalkerConfig};
