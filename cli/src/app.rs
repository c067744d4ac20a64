//! Application context — unified state passed to every command handler.
//!
//! `AppContext` bundles the output context, the loaded settings, and the
//! interactivity mode so command handlers share one construction path.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::config::Settings;
use crate::output::OutputContext;

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Skip interactive confirmations (also set by `CI` / `THERMOPI_YES` env vars).
    pub yes: bool,
    /// Optional YAML settings file overriding the built-in defaults.
    pub config_path: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Provisioning settings (defaults, optionally overridden from a file).
    pub settings: Settings,
    /// When `true`, skip interactive confirmations and use defaults.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("THERMOPI_YES").is_ok();
        let non_interactive = flags.yes || ci_env;

        let settings = match &flags.config_path {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            settings,
            non_interactive,
        })
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `THERMOPI_YES`
    /// env), returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
