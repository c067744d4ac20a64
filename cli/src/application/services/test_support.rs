//! Shared mock infrastructure for service unit tests.
//!
//! Provides canned port implementations that record the calls made against
//! them, so each test asserts on which branches actually ran instead of
//! re-defining the same boilerplate.

#![allow(clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;

use crate::application::ports::{
    CredentialSource, FileOwnership, GitClient, PackageManager, ProgressReporter, PythonEnv,
    SensorLink, SensorProbe, ServiceManager,
};

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Reporter that swallows every event.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

// ── Package manager ───────────────────────────────────────────────────────────

/// Package manager double recording every install invocation.
pub struct RecordingPackages {
    installed: bool,
    install_ok: bool,
    install_calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingPackages {
    pub fn installed() -> Self {
        Self {
            installed: true,
            install_ok: true,
            install_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn absent() -> Self {
        Self {
            installed: false,
            ..Self::installed()
        }
    }

    pub fn absent_and_failing() -> Self {
        Self {
            installed: false,
            install_ok: false,
            install_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn install_calls(&self) -> Vec<Vec<String>> {
        self.install_calls.lock().expect("lock").clone()
    }
}

impl PackageManager for RecordingPackages {
    async fn is_installed(&self, _package: &str) -> Result<bool> {
        Ok(self.installed)
    }

    async fn install(&self, packages: &[String]) -> Result<()> {
        self.install_calls
            .lock()
            .expect("lock")
            .push(packages.to_vec());
        if self.install_ok {
            Ok(())
        } else {
            anyhow::bail!("apt-get install exited with status 100")
        }
    }
}

// ── Service manager ───────────────────────────────────────────────────────────

/// Service manager double with scripted `is-active` answers.
///
/// Successive `is_active` calls pop from `active`, then fall back to
/// `active_default`. Only mutating calls (enable, start, daemon-reload) are
/// recorded in `calls`.
pub struct ScriptedServices {
    active: Mutex<VecDeque<bool>>,
    active_default: bool,
    enabled: bool,
    enable_ok: bool,
    status_text: String,
    calls: Mutex<Vec<String>>,
}

impl ScriptedServices {
    fn base() -> Self {
        Self {
            active: Mutex::new(VecDeque::new()),
            active_default: true,
            enabled: true,
            enable_ok: true,
            status_text: "● unit - active (running)".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn active_and_enabled() -> Self {
        Self::base()
    }

    pub fn never_active() -> Self {
        Self {
            active_default: false,
            enabled: false,
            ..Self::base()
        }
    }

    /// Inactive on the first query, active on every re-check after start.
    pub fn activates_after_start() -> Self {
        Self {
            active: Mutex::new(VecDeque::from([false])),
            enabled: false,
            ..Self::base()
        }
    }

    pub fn active_but_enable_fails() -> Self {
        Self {
            enabled: false,
            enable_ok: false,
            ..Self::base()
        }
    }

    pub fn with_status(mut self, text: &str) -> Self {
        self.status_text = text.to_string();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().expect("lock").push(call.to_string());
    }
}

impl ServiceManager for ScriptedServices {
    async fn is_active(&self, _unit: &str) -> Result<bool> {
        Ok(self
            .active
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or(self.active_default))
    }

    async fn is_enabled(&self, _unit: &str) -> Result<bool> {
        Ok(self.enabled)
    }

    async fn enable(&self, unit: &str) -> Result<()> {
        self.record("enable");
        if self.enable_ok {
            Ok(())
        } else {
            anyhow::bail!("systemctl enable {unit} failed")
        }
    }

    async fn start(&self, _unit: &str) -> Result<()> {
        self.record("start");
        Ok(())
    }

    async fn daemon_reload(&self) -> Result<()> {
        self.record("daemon-reload");
        Ok(())
    }

    async fn status(&self, _unit: &str) -> Result<String> {
        Ok(self.status_text.clone())
    }
}

// ── Sensor probe ──────────────────────────────────────────────────────────────

/// Probe double returning a fixed link state and counting invocations.
pub struct StubProbe {
    link: SensorLink,
    calls: Mutex<u32>,
}

impl StubProbe {
    pub fn new(link: SensorLink) -> Self {
        Self {
            link,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().expect("lock")
    }
}

impl SensorProbe for StubProbe {
    async fn check(&self) -> Result<SensorLink> {
        *self.calls.lock().expect("lock") += 1;
        Ok(self.link)
    }
}

// ── Python environment ────────────────────────────────────────────────────────

/// Python environment double recording venv locations.
pub struct RecordingPython {
    calls: Mutex<Vec<PathBuf>>,
}

impl RecordingPython {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().expect("lock").clone()
    }
}

impl PythonEnv for RecordingPython {
    async fn create_venv(&self, dir: &Path) -> Result<()> {
        self.calls.lock().expect("lock").push(dir.to_path_buf());
        Ok(())
    }
}

// ── File ownership ────────────────────────────────────────────────────────────

/// Ownership double recording chown targets.
pub struct RecordingChown {
    calls: Mutex<Vec<(PathBuf, String)>>,
}

impl RecordingChown {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.lock().expect("lock").clone()
    }
}

impl FileOwnership for RecordingChown {
    async fn chown_recursive(&self, path: &Path, user: &str) -> Result<()> {
        self.calls
            .lock()
            .expect("lock")
            .push((path.to_path_buf(), user.to_string()));
        Ok(())
    }
}

// ── Git client ────────────────────────────────────────────────────────────────

/// Git double recording every operation as a flat call string.
pub struct RecordingGit {
    configs: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingGit {
    pub fn with_identity() -> Self {
        let mut configs = HashMap::new();
        configs.insert("user.name".to_string(), "Pi Monitor".to_string());
        configs.insert("user.email".to_string(), "pi@example.net".to_string());
        Self {
            configs: Mutex::new(configs),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without_identity() -> Self {
        Self {
            configs: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn config(&self, key: &str) -> Option<String> {
        self.configs.lock().expect("lock").get(key).cloned()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("lock").push(call);
    }
}

impl GitClient for RecordingGit {
    async fn global_config(&self, key: &str) -> Result<Option<String>> {
        Ok(self.configs.lock().expect("lock").get(key).cloned())
    }

    async fn set_global_config(&self, key: &str, value: &str) -> Result<()> {
        self.record(format!("set_config {key}"));
        self.configs
            .lock()
            .expect("lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn init(&self, _dir: &Path) -> Result<()> {
        self.record("init".to_string());
        Ok(())
    }

    async fn set_remote(&self, _dir: &Path, name: &str, url: &str) -> Result<()> {
        self.record(format!("set_remote {name} {url}"));
        Ok(())
    }

    async fn add_all(&self, _dir: &Path) -> Result<()> {
        self.record("add_all".to_string());
        Ok(())
    }

    async fn commit(&self, _dir: &Path, message: &str) -> Result<()> {
        self.record(format!("commit {message}"));
        Ok(())
    }

    async fn rename_branch(&self, _dir: &Path, name: &str) -> Result<()> {
        self.record(format!("branch {name}"));
        Ok(())
    }

    async fn push_upstream(&self, _dir: &Path, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push {remote} {branch}"));
        Ok(())
    }
}

// ── Credential source ─────────────────────────────────────────────────────────

/// Credential double answering prompts from a scripted queue and secrets
/// from a fixed name/value table.
pub struct ScriptedCredentials {
    inputs: Mutex<VecDeque<String>>,
    secrets: HashMap<String, String>,
}

impl ScriptedCredentials {
    pub fn new(inputs: &[&str], secrets: &[(&str, &str)]) -> Self {
        Self {
            inputs: Mutex::new(inputs.iter().map(|s| (*s).to_string()).collect()),
            secrets: secrets
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl CredentialSource for ScriptedCredentials {
    fn input(&self, prompt: &str) -> Result<String> {
        self.inputs
            .lock()
            .expect("lock")
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted answer for prompt '{prompt}'"))
    }

    fn secret(&self, name: &str, _prompt: &str) -> Result<String> {
        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no scripted secret named '{name}'"))
    }
}
