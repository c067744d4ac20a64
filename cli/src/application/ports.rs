//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;

use anyhow::Result;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Result of the sensor-library connectivity smoke test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorLink {
    /// Library imported and the daemon accepted the connection.
    Connected,
    /// The client library is not importable in the target runtime.
    LibraryMissing,
    /// Library present but the daemon refused the connection.
    Disconnected,
}

// ── Package Manager Port ──────────────────────────────────────────────────────

/// Queries and mutates the OS package database.
#[allow(async_fn_in_trait)]
pub trait PackageManager {
    /// Whether `package` is installed.
    async fn is_installed(&self, package: &str) -> Result<bool>;
    /// Install the given packages; fails when the package manager exits
    /// non-zero.
    async fn install(&self, packages: &[String]) -> Result<()>;
}

// ── Service Manager Port ──────────────────────────────────────────────────────

/// Queries and mutates the system service manager's unit registry.
#[allow(async_fn_in_trait)]
pub trait ServiceManager {
    /// Whether `unit` reports active.
    async fn is_active(&self, unit: &str) -> Result<bool>;
    /// Whether `unit` is enabled at boot.
    async fn is_enabled(&self, unit: &str) -> Result<bool>;
    /// Enable `unit` at boot.
    async fn enable(&self, unit: &str) -> Result<()>;
    /// Start `unit` now.
    async fn start(&self, unit: &str) -> Result<()>;
    /// Reload the unit cache after installing a unit file.
    async fn daemon_reload(&self) -> Result<()>;
    /// Human-readable status text for `unit` (non-fatal on inactive units).
    async fn status(&self, unit: &str) -> Result<String>;
}

// ── Sensor Probe Port ─────────────────────────────────────────────────────────

/// Runs the inline connectivity smoke test in the target runtime.
#[allow(async_fn_in_trait)]
pub trait SensorProbe {
    /// Import the client library, open a daemon connection, release it.
    async fn check(&self) -> Result<SensorLink>;
}

// ── Python Environment Port ───────────────────────────────────────────────────

/// Manages the isolated Python runtime environment.
#[allow(async_fn_in_trait)]
pub trait PythonEnv {
    /// Create a virtualenv at `dir`. Idempotent — recreating an existing
    /// environment is not an error.
    async fn create_venv(&self, dir: &Path) -> Result<()>;
}

// ── Git Client Port ───────────────────────────────────────────────────────────

/// Wraps the source-control client.
#[allow(async_fn_in_trait)]
pub trait GitClient {
    /// Read a global config value; `None` when unset.
    async fn global_config(&self, key: &str) -> Result<Option<String>>;
    /// Set a global config value.
    async fn set_global_config(&self, key: &str, value: &str) -> Result<()>;
    /// Initialize a repository in `dir`.
    async fn init(&self, dir: &Path) -> Result<()>;
    /// Register or rewrite the remote `name` to `url`.
    async fn set_remote(&self, dir: &Path, name: &str, url: &str) -> Result<()>;
    /// Stage all files.
    async fn add_all(&self, dir: &Path) -> Result<()>;
    /// Commit the staged files.
    async fn commit(&self, dir: &Path, message: &str) -> Result<()>;
    /// Rename the current branch.
    async fn rename_branch(&self, dir: &Path, name: &str) -> Result<()>;
    /// Push `branch` to `remote`, establishing the upstream tracking
    /// relationship.
    async fn push_upstream(&self, dir: &Path, remote: &str, branch: &str) -> Result<()>;
}

// ── File Ownership Port ───────────────────────────────────────────────────────

/// Transfers file ownership to the designated account.
#[allow(async_fn_in_trait)]
pub trait FileOwnership {
    /// Recursively chown `path` to `user`.
    async fn chown_recursive(&self, path: &Path, user: &str) -> Result<()>;
}

// ── Credential Source Port ────────────────────────────────────────────────────

/// Obtains values from the operator.
///
/// The single secret capability — "obtain a secret by name" — is satisfiable
/// by an interactive hidden prompt, an environment variable, or a scripted
/// test double, so the deploy use-case never requires a terminal.
pub trait CredentialSource {
    /// Obtain a non-secret value, echoed while typed.
    ///
    /// # Errors
    ///
    /// Returns an error when no value can be obtained (e.g. no TTY).
    fn input(&self, prompt: &str) -> Result<String>;

    /// Obtain a secret by name, never echoed.
    ///
    /// # Errors
    ///
    /// Returns an error when no value can be obtained (e.g. no TTY).
    fn secret(&self, name: &str, prompt: &str) -> Result<String>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
