//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`, or
//! `crate::application`. All error types implement `thiserror::Error` and
//! convert to `anyhow::Error` via the `?` operator. Messages carry the
//! remediation line the user needs, so callers never re-wrap them.

use thiserror::Error;

// ── Daemon setup errors ───────────────────────────────────────────────────────

/// Errors raised while provisioning the GPIO daemon.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(
        "pigpio daemon did not become active within {waited_secs}s.\n\
         Check it manually: sudo systemctl status pigpiod"
    )]
    DaemonNotActive { waited_secs: u64 },

    #[error(
        "python pigpio library could not be imported.\n\
         Install it: sudo apt-get install python3-pigpio"
    )]
    LibraryMissing,

    #[error(
        "pigpio daemon refused the connection.\n\
         Restart it: sudo systemctl restart pigpiod"
    )]
    DaemonNotConnected,
}

// ── Deploy errors ─────────────────────────────────────────────────────────────

/// Errors raised while deploying the monitor service.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("deploy must run as '{expected}' or root (current user: {current})")]
    WrongUser { current: String, expected: String },

    #[error(
        "required application files are missing:\n{}\n\
         Run deploy from the directory containing the monitor sources.",
        format_missing(.0)
    )]
    MissingFiles(Vec<String>),

    #[error("remote URL '{0}' is not an http(s) URL")]
    BadRemoteUrl(String),
}

fn format_missing(files: &[String]) -> String {
    files
        .iter()
        .map(|f| format!("  - {f}"))
        .collect::<Vec<_>>()
        .join("\n")
}
