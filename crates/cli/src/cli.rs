// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blocks rendered site output that contains blacklisted terms
#[derive(Parser)]
#[command(name = "blacklist")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BLACKLIST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pre-deploy gate over a directory of rendered artifacts
    Check(CheckArgs),
    /// Run the post-render gate over content read from stdin
    Render(RenderArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Rendered output directory (or a single file)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Host command the artifacts are being prepared for
    #[arg(long = "command", default_value = "build", value_name = "NAME")]
    pub host_command: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = 100)]
    pub max_depth: usize,
}

#[derive(clap::Args)]
pub struct RenderArgs {
    /// Output path the content renders to (e.g. /en/index.html)
    #[arg(long, value_name = "PATH")]
    pub view: String,

    /// Treat the content as a non-document artifact (always passes through)
    #[arg(long)]
    pub not_renderable: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
