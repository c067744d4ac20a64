//! Provisioning settings.
//!
//! The shell-era version of this tool hard-coded the install path and the
//! designated account in the script body. Here they live in an explicit
//! settings structure with sensible Raspberry Pi defaults, optionally
//! overridden from a YAML file, so tests and alternate environments never
//! have to edit source.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level settings: one section per subcommand.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `setup-daemon` settings.
    pub daemon: DaemonConfig,
    /// `deploy` settings.
    pub deploy: DeployConfig,
}

impl Settings {
    /// Load settings from a YAML file, falling back to defaults for any
    /// field the file omits.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))
    }
}

/// Settings for the GPIO daemon provisioner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DaemonConfig {
    /// OS package providing the daemon.
    pub package: String,
    /// Systemd unit name of the daemon.
    pub service: String,
    /// Interval between activation re-checks after starting the daemon.
    pub poll_interval_ms: u64,
    /// Deadline for the daemon to report active after being started.
    pub wait_timeout_ms: u64,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            package: "pigpio".to_string(),
            service: "pigpiod".to_string(),
            poll_interval_ms: 2000,
            wait_timeout_ms: 10_000,
        }
    }
}

impl DaemonConfig {
    /// Interval between activation re-checks.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Deadline for the daemon to become active.
    #[must_use]
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }
}

/// Settings for the monitor service deployer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Account the service runs as; `deploy` must be invoked as this
    /// account or as root.
    pub service_user: String,
    /// Directory the application is installed into.
    pub install_dir: PathBuf,
    /// Install path baked into the shipped `config.ini`; replaced with
    /// `install_dir` during deployment.
    pub default_install_dir: String,
    /// Directory systemd unit files are installed into.
    pub unit_dir: PathBuf,
    /// Name of the deployed systemd service.
    pub service_name: String,
    /// Filename of the shipped unit file.
    pub unit_file: String,
    /// OS packages installed before deployment.
    pub packages: Vec<String>,
    /// Files that must be present before activation proceeds.
    pub required_files: Vec<String>,
    /// Candidate subdirectories (relative to `install_dir`) searched for
    /// the application files, in order of preference.
    pub app_subdirs: Vec<String>,
    /// Configuration file whose embedded path gets patched.
    pub config_file: String,
    /// Main executable script.
    pub main_script: String,
    /// Data subdirectory created under `install_dir`.
    pub data_subdir: String,
    /// Virtualenv subdirectory created under `install_dir`.
    pub venv_subdir: String,
    /// Git remote name.
    pub remote_name: String,
    /// Branch the initial commit is pushed to.
    pub branch: String,
    /// Commit message for the initial push.
    pub commit_message: String,
    /// Log file location, referenced in the printed summary only.
    pub log_file: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            service_user: "pi".to_string(),
            install_dir: PathBuf::from("/home/pi/temperature_humidity_monitor"),
            default_install_dir: "/home/pi/temperature_humidity_monitor".to_string(),
            unit_dir: PathBuf::from("/etc/systemd/system"),
            service_name: "temperature-monitor".to_string(),
            unit_file: "temperature-monitor.service".to_string(),
            packages: [
                "python3",
                "python3-pip",
                "python3-venv",
                "git",
                "pigpio",
                "python3-pigpio",
            ]
            .map(String::from)
            .to_vec(),
            required_files: [
                "data_collector.py",
                "dht11_library.py",
                "config.ini",
                "temperature-monitor.service",
            ]
            .map(String::from)
            .to_vec(),
            app_subdirs: ["raspberry_pi", "."].map(String::from).to_vec(),
            config_file: "config.ini".to_string(),
            main_script: "data_collector.py".to_string(),
            data_subdir: "data".to_string(),
            venv_subdir: "venv".to_string(),
            remote_name: "origin".to_string(),
            branch: "main".to_string(),
            commit_message: "Initial commit: temperature humidity monitor".to_string(),
            log_file: PathBuf::from("/var/log/temp_humidity.log"),
        }
    }
}

impl DeployConfig {
    /// Virtualenv directory under the install directory.
    #[must_use]
    pub fn venv_dir(&self) -> PathBuf {
        self.install_dir.join(&self.venv_subdir)
    }

    /// Data directory under the install directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.install_dir.join(&self.data_subdir)
    }
}
