//! apt/dpkg adapter for the `PackageManager` port.

use anyhow::{Context, Result};

use crate::application::ports::PackageManager;
use crate::command_runner::{CommandRunner, INSTALL_TIMEOUT};

/// Package manager backed by `dpkg-query` and `apt-get`.
pub struct AptPackageManager<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> AptPackageManager<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> PackageManager for AptPackageManager<R> {
    async fn is_installed(&self, package: &str) -> Result<bool> {
        // dpkg-query exits non-zero for unknown packages; that is a clean
        // "not installed", not a failure.
        let output = self
            .runner
            .run("dpkg-query", &["-W", "-f=${Status}", package])
            .await
            .context("running dpkg-query")?;
        if !output.status.success() {
            return Ok(false);
        }
        Ok(String::from_utf8_lossy(&output.stdout).contains("install ok installed"))
    }

    async fn install(&self, packages: &[String]) -> Result<()> {
        let mut args = vec!["install", "-y"];
        args.extend(packages.iter().map(String::as_str));
        let output = self
            .runner
            .run_with_timeout("apt-get", &args, INSTALL_TIMEOUT)
            .await
            .context("running apt-get install")?;
        if !output.status.success() {
            anyhow::bail!(
                "apt-get install failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}
