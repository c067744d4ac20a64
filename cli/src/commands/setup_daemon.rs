//! `setup-daemon` command — provision the pigpio GPIO daemon.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::daemon_setup::setup_daemon;
use crate::command_runner::TokioCommandRunner;
use crate::infra::apt::AptPackageManager;
use crate::infra::host;
use crate::infra::python::PigpioProbe;
use crate::infra::systemd::SystemdManager;
use crate::output::TerminalReporter;

/// Run the GPIO daemon setup.
///
/// # Errors
///
/// Returns an error when a provisioning step fails; the message names the
/// step and carries remediation guidance where the failure has a known fix.
pub async fn run(app: &AppContext) -> Result<()> {
    let out = &app.output;
    out.header("GPIO daemon setup");
    if let Some(os) = host::os_pretty_name() {
        out.kv("os    ", &os);
    }
    if let Some(python) = host::python_version(&TokioCommandRunner::default()).await {
        out.kv("python", &python);
    }

    let packages = AptPackageManager::new(TokioCommandRunner::default());
    let services = SystemdManager::new(TokioCommandRunner::default());
    let probe = PigpioProbe::new(TokioCommandRunner::default());
    let reporter = TerminalReporter::new(out);

    let outcome = setup_daemon(&packages, &services, &probe, &reporter, &app.settings.daemon)
        .await?;

    out.success(&format!(
        "{} is running and reachable",
        app.settings.daemon.service
    ));
    if outcome.installed_package || outcome.started_daemon {
        out.info("the daemon is enabled at boot; no further setup is needed");
    }

    out.header("DHT11 wiring");
    out.kv("VCC ", "3.3V (pin 1)");
    out.kv("DATA", "GPIO4 (pin 7)");
    out.kv("GND ", "GND (pin 6)");
    out.info("add a 10kΩ pull-up resistor between VCC and DATA");
    out.info("next: run 'thermopi deploy' to install the monitor service");
    Ok(())
}
