//! Interactive credential source for the `CredentialSource` port.

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use crate::application::ports::CredentialSource;

/// Prefix for environment variables that answer secret requests without a
/// prompt, e.g. `THERMOPI_GITHUB_TOKEN` for the secret named `github-token`.
const SECRET_ENV_PREFIX: &str = "THERMOPI_";

/// Credential source backed by terminal prompts.
///
/// Secrets are looked up in the environment first so unattended runs never
/// block on a hidden prompt; values are used for the push only and never
/// written to disk.
pub struct TerminalCredentials {
    interactive: bool,
}

impl TerminalCredentials {
    #[must_use]
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

fn secret_env_var(name: &str) -> String {
    format!(
        "{SECRET_ENV_PREFIX}{}",
        name.to_uppercase().replace('-', "_")
    )
}

impl CredentialSource for TerminalCredentials {
    fn input(&self, prompt: &str) -> Result<String> {
        if !self.interactive {
            anyhow::bail!("'{prompt}' requires a terminal (running non-interactively)");
        }
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("reading '{prompt}'"))
    }

    fn secret(&self, name: &str, prompt: &str) -> Result<String> {
        let var = secret_env_var(name);
        if let Ok(value) = std::env::var(&var) {
            if !value.is_empty() {
                return Ok(value);
            }
        }
        if !self.interactive {
            anyhow::bail!("secret '{name}' not found: set {var} or run interactively");
        }
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()
            .with_context(|| format!("reading '{prompt}'"))
    }
}
