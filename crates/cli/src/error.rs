// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::hooks::Finding;
use crate::terms::TermError;

/// Blacklist error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid, including bad blacklist terms
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// A blacklisted term was found where the policy demands failure.
    #[error("Blacklisted term ({}) found in {}: \n{}", .0.term, .0.path, .0.snippet)]
    Blacklisted(Finding),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walker error.
    #[error("walk error: {message}")]
    Walk { message: String },
}

impl Error {
    /// True when the error blocks the build because of blacklisted content.
    pub fn is_violation(&self) -> bool {
        matches!(self, Error::Blacklisted(_))
    }

    /// The offending finding, if this is a content-policy violation.
    pub fn finding(&self) -> Option<&Finding> {
        match self {
            Error::Blacklisted(finding) => Some(finding),
            _ => None,
        }
    }

    /// Attach the config file path to a config error that has none yet.
    pub fn with_config_path(self, config_path: &std::path::Path) -> Self {
        match self {
            Error::Config {
                message,
                path: None,
            } => Error::Config {
                message,
                path: Some(config_path.to_path_buf()),
            },
            other => other,
        }
    }
}

impl From<TermError> for Error {
    fn from(err: TermError) -> Self {
        Error::Config {
            message: err.to_string(),
            path: None,
        }
    }
}

/// Result type using blacklist Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No blacklisted content blocked the run
    Success = 0,
    /// Blacklisted content was found
    CheckFailed = 1,
    /// Configuration or argument error (clap exits with 2 on its own)
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Blacklisted(_) => ExitCode::CheckFailed,
            Error::Io { .. } | Error::Walk { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
