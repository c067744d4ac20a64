//! systemctl adapter for the `ServiceManager` port.

use anyhow::{Context, Result};

use crate::application::ports::ServiceManager;
use crate::command_runner::CommandRunner;

/// Service manager backed by `systemctl`.
pub struct SystemdManager<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SystemdManager<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn checked(&self, args: &[&str]) -> Result<()> {
        let output = self
            .runner
            .run("systemctl", args)
            .await
            .with_context(|| format!("running systemctl {}", args.join(" ")))?;
        if !output.status.success() {
            anyhow::bail!(
                "systemctl {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

impl<R: CommandRunner> ServiceManager for SystemdManager<R> {
    async fn is_active(&self, unit: &str) -> Result<bool> {
        // Non-zero exit means inactive, not an error.
        let output = self
            .runner
            .run("systemctl", &["is-active", "--quiet", unit])
            .await
            .context("running systemctl is-active")?;
        Ok(output.status.success())
    }

    async fn is_enabled(&self, unit: &str) -> Result<bool> {
        let output = self
            .runner
            .run("systemctl", &["is-enabled", "--quiet", unit])
            .await
            .context("running systemctl is-enabled")?;
        Ok(output.status.success())
    }

    async fn enable(&self, unit: &str) -> Result<()> {
        self.checked(&["enable", unit]).await
    }

    async fn start(&self, unit: &str) -> Result<()> {
        self.checked(&["start", unit]).await
    }

    async fn daemon_reload(&self) -> Result<()> {
        self.checked(&["daemon-reload"]).await
    }

    async fn status(&self, unit: &str) -> Result<String> {
        // `systemctl status` exits non-zero for inactive or failed units;
        // the captured text is the point, so the exit code is ignored.
        let output = self
            .runner
            .run("systemctl", &["status", "--no-pager", unit])
            .await
            .context("running systemctl status")?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
