//! `deploy` command — install, publish, and start the monitor service.

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::services::deploy::deploy;
use crate::command_runner::TokioCommandRunner;
use crate::infra::apt::AptPackageManager;
use crate::infra::chown::ChownTool;
use crate::infra::credentials::TerminalCredentials;
use crate::infra::git::GitCli;
use crate::infra::python::Python;
use crate::infra::systemd::SystemdManager;
use crate::output::TerminalReporter;

/// Run the monitor service deployment.
///
/// The application files are taken from the current directory; the install
/// location and service identity come from the settings.
///
/// # Errors
///
/// Returns an error when a deployment step fails; the run stops at the
/// first failure.
pub async fn run(app: &AppContext) -> Result<()> {
    let cfg = &app.settings.deploy;
    let out = &app.output;

    out.header("Monitor service deploy");
    out.kv("install dir", &cfg.install_dir.to_string_lossy());
    out.kv("service    ", &cfg.service_name);
    if !app.confirm(
        &format!("Deploy to {}?", cfg.install_dir.display()),
        true,
    )? {
        out.info("deploy cancelled");
        return Ok(());
    }

    let current_user = std::env::var("USER").context("determining current user")?;
    let source_dir = std::env::current_dir().context("determining source directory")?;

    let packages = AptPackageManager::new(TokioCommandRunner::default());
    let services = SystemdManager::new(TokioCommandRunner::default());
    let git = GitCli::new(TokioCommandRunner::default());
    let python = Python::new(TokioCommandRunner::default());
    let ownership = ChownTool::new(TokioCommandRunner::default());
    let credentials = TerminalCredentials::new(!app.non_interactive);
    let reporter = TerminalReporter::new(out);

    let outcome = deploy(
        &packages,
        &services,
        &git,
        &python,
        &ownership,
        &credentials,
        &reporter,
        cfg,
        &source_dir,
        &current_user,
    )
    .await?;

    if !out.quiet {
        println!("{}", outcome.status_text.trim_end());
    }

    out.header("Deployment complete");
    out.kv("app root", &outcome.app_root.to_string_lossy());
    out.kv("data log", &cfg.log_file.to_string_lossy());
    out.info(&format!(
        "manage:  sudo systemctl start|stop|status {}",
        cfg.service_name
    ));
    out.info(&format!("logs:    journalctl -u {} -f", cfg.service_name));
    out.info(&format!(
        "manual:  {}/bin/python {}/{} --once --test",
        cfg.venv_dir().display(),
        outcome.app_root.display(),
        cfg.main_script
    ));
    out.info("dashboard: enable GitHub Pages on the pushed repository (Settings → Pages, main branch)");
    Ok(())
}
