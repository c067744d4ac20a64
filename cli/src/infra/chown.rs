//! chown adapter for the `FileOwnership` port.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::FileOwnership;
use crate::command_runner::CommandRunner;

/// Ownership transfer backed by `chown -R`.
pub struct ChownTool<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> ChownTool<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> FileOwnership for ChownTool<R> {
    async fn chown_recursive(&self, path: &Path, user: &str) -> Result<()> {
        let owner = format!("{user}:{user}");
        let path_str = path.to_string_lossy();
        let output = self
            .runner
            .run("chown", &["-R", &owner, path_str.as_ref()])
            .await
            .context("running chown")?;
        if !output.status.success() {
            anyhow::bail!(
                "chown -R {owner} failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}
