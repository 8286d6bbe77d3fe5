// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `blacklist render` command implementation.
//!
//! Reads freshly rendered content from stdin, runs the post-render gate and
//! echoes the content on success.

use std::io::{Read, Write};
use std::path::PathBuf;

use blacklist::cli::{Cli, RenderArgs};
use blacklist::config;
use blacklist::error::{Error, ExitCode};
use blacklist::extension::BlacklistExtension;
use blacklist::hooks::Document;

/// Content piped in by the host for a single view.
struct PipedDocument<'a> {
    view: &'a str,
    renderable: bool,
}

impl Document for PipedDocument<'_> {
    fn view(&self) -> &str {
        self.view
    }

    fn is_renderable(&self) -> bool {
        self.renderable
    }
}

/// Run the `blacklist render` command.
pub fn run(cli: &Cli, args: &RenderArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let (config, config_path) = config::resolve_and_load(cli.config.as_deref(), &cwd)?;
    let extension = BlacklistExtension::new(&config.blacklist).map_err(|e| match &config_path {
        Some(path) => e.with_config_path(path),
        None => e,
    })?;

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|source| Error::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;

    let doc = PipedDocument {
        view: &args.view,
        renderable: !args.not_renderable,
    };
    let content = extension.post_render().trigger(String::new(), &doc, &raw)?;

    // No earlier hook ran, so an empty result means "keep the raw content".
    let content = if content.is_empty() { raw } else { content };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;

    Ok(ExitCode::Success)
}
