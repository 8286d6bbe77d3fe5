// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `blacklist check` command implementation.
//!
//! Walks a rendered output directory and runs the pre-deploy gate over each
//! artifact, stopping at the first violation.

use tracing::debug;

use blacklist::cli::{CheckArgs, Cli, OutputFormat};
use blacklist::color;
use blacklist::config;
use blacklist::error::{Error, ExitCode};
use blacklist::extension::BlacklistExtension;
use blacklist::hooks::CollectingSink;
use blacklist::output::Report;
use blacklist::output::json::JsonFormatter;
use blacklist::output::text::TextFormatter;
use blacklist::walker::{ArtifactWalker, WalkerConfig};

/// Run the `blacklist check` command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let root = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd.clone(),
    };

    let (config, config_path) = config::resolve_and_load(cli.config.as_deref(), &cwd)?;
    let extension = BlacklistExtension::new(&config.blacklist).map_err(|e| match &config_path {
        Some(path) => e.with_config_path(path),
        None => e,
    })?;

    let walker = ArtifactWalker::new(WalkerConfig {
        max_depth: Some(args.max_depth),
    });
    let (artifacts, stats) = walker.walk(&root)?;
    debug!(
        files = stats.files_found,
        errors = stats.errors,
        symlink_loops = stats.symlink_loops,
        "walked rendered output"
    );

    let sink = CollectingSink::new();
    let gate = extension.pre_deploy_with(&sink);
    let mut report = Report::new(&args.host_command);

    for artifact in &artifacts {
        report.documents += 1;
        match gate.trigger((), artifact, &args.host_command) {
            Ok(()) => {}
            Err(Error::Blacklisted(finding)) => {
                report.violation = Some(finding);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    report.warnings = sink.findings();

    match args.output {
        OutputFormat::Text => {
            let choice = color::choice_from_flags(args.color, args.no_color);
            TextFormatter::stdout(choice).write_report(&report)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&report)?;
        }
    }

    Ok(if report.passed() {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
