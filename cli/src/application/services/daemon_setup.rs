//! Application service — GPIO daemon setup use-case.
//!
//! Ensures the pigpio package is installed, the daemon is active and
//! enabled at boot, and the client library can actually reach it. All I/O
//! is routed through injected port traits; the command handler owns the
//! presentation.

use anyhow::{Context, Result};

use crate::application::ports::{
    PackageManager, ProgressReporter, SensorLink, SensorProbe, ServiceManager,
};
use crate::domain::config::DaemonConfig;
use crate::domain::error::SetupError;

/// Outcome of the `setup_daemon` use-case.
#[derive(Debug)]
pub struct SetupOutcome {
    /// Whether the package install branch ran.
    pub installed_package: bool,
    /// Whether the daemon had to be started.
    pub started_daemon: bool,
}

/// Provision the GPIO daemon.
///
/// Every step is fatal on failure except the enable-at-boot toggle, which
/// is best effort. The connectivity check never runs when an earlier step
/// failed.
///
/// # Errors
///
/// Returns an error if the package cannot be installed, the daemon never
/// reaches the active state, or the connectivity check fails.
pub async fn setup_daemon(
    packages: &impl PackageManager,
    services: &impl ServiceManager,
    probe: &impl SensorProbe,
    reporter: &impl ProgressReporter,
    cfg: &DaemonConfig,
) -> Result<SetupOutcome> {
    let mut installed_package = false;
    if packages
        .is_installed(&cfg.package)
        .await
        .context("querying package database")?
    {
        reporter.success(&format!("{} already installed", cfg.package));
    } else {
        reporter.step(&format!("installing {}...", cfg.package));
        packages
            .install(std::slice::from_ref(&cfg.package))
            .await
            .with_context(|| format!("installing {}", cfg.package))?;
        reporter.success(&format!("{} installed", cfg.package));
        installed_package = true;
    }

    let mut started_daemon = false;
    if services
        .is_active(&cfg.service)
        .await
        .context("querying daemon state")?
    {
        reporter.success(&format!("{} already active", cfg.service));
    } else {
        reporter.step(&format!("starting {}...", cfg.service));
        services
            .enable(&cfg.service)
            .await
            .with_context(|| format!("enabling {}", cfg.service))?;
        services
            .start(&cfg.service)
            .await
            .with_context(|| format!("starting {}", cfg.service))?;
        wait_until_active(services, cfg).await?;
        reporter.success(&format!("{} active", cfg.service));
        started_daemon = true;
    }

    ensure_enabled_at_boot(services, reporter, cfg).await;

    reporter.step("verifying daemon connection...");
    match probe.check().await.context("running connectivity check")? {
        SensorLink::Connected => reporter.success("daemon connection verified"),
        SensorLink::LibraryMissing => return Err(SetupError::LibraryMissing.into()),
        SensorLink::Disconnected => return Err(SetupError::DaemonNotConnected.into()),
    }

    Ok(SetupOutcome {
        installed_package,
        started_daemon,
    })
}

/// Poll the daemon's active state until the configured deadline.
///
/// The daemon needs a moment after `start` before it reports active, so
/// the first check always happens after one poll interval.
async fn wait_until_active(services: &impl ServiceManager, cfg: &DaemonConfig) -> Result<()> {
    let deadline = tokio::time::Instant::now() + cfg.wait_timeout();
    loop {
        tokio::time::sleep(cfg.poll_interval()).await;
        if services
            .is_active(&cfg.service)
            .await
            .context("re-checking daemon state")?
        {
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(SetupError::DaemonNotActive {
                waited_secs: cfg.wait_timeout().as_secs(),
            }
            .into());
        }
    }
}

/// Best-effort enable-at-boot: a failure here is reported but never fails
/// the run.
async fn ensure_enabled_at_boot(
    services: &impl ServiceManager,
    reporter: &impl ProgressReporter,
    cfg: &DaemonConfig,
) {
    match services.is_enabled(&cfg.service).await {
        Ok(true) => reporter.success(&format!("{} enabled at boot", cfg.service)),
        Ok(false) => match services.enable(&cfg.service).await {
            Ok(()) => reporter.success(&format!("{} enabled at boot", cfg.service)),
            Err(e) => reporter.warn(&format!("could not enable {} at boot: {e:#}", cfg.service)),
        },
        Err(e) => reporter.warn(&format!(
            "could not query boot state of {}: {e:#}",
            cfg.service
        )),
    }
}
