//! python3 adapters — virtualenv creation and the pigpio connectivity probe.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{PythonEnv, SensorLink, SensorProbe};
use crate::command_runner::CommandRunner;

/// Exit code the probe script uses for "pigpio not importable".
const EXIT_LIBRARY_MISSING: i32 = 2;
/// Exit code the probe script uses for "daemon refused the connection".
const EXIT_DISCONNECTED: i32 = 3;

/// Connectivity smoke test fed to `python3` on stdin: import the client
/// library, open a daemon connection, release it. Distinct exit codes keep
/// the two failure modes apart.
const PROBE_SCRIPT: &str = "\
import sys
try:
    import pigpio
except ImportError:
    sys.exit(2)
pi = pigpio.pi()
if not pi.connected:
    sys.exit(3)
pi.stop()
";

/// Python environment backed by `python3 -m venv`.
pub struct Python<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> Python<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> PythonEnv for Python<R> {
    async fn create_venv(&self, dir: &Path) -> Result<()> {
        let dir_str = dir.to_string_lossy();
        let output = self
            .runner
            .run("python3", &["-m", "venv", dir_str.as_ref()])
            .await
            .context("running python3 -m venv")?;
        if !output.status.success() {
            anyhow::bail!(
                "python3 -m venv failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

/// Sensor probe that runs the inline pigpio check in the system python.
pub struct PigpioProbe<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> PigpioProbe<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> SensorProbe for PigpioProbe<R> {
    async fn check(&self) -> Result<SensorLink> {
        let output = self
            .runner
            .run_with_stdin("python3", &["-"], PROBE_SCRIPT.as_bytes())
            .await
            .context("running connectivity probe")?;
        match output.status.code() {
            Some(0) => Ok(SensorLink::Connected),
            Some(EXIT_LIBRARY_MISSING) => Ok(SensorLink::LibraryMissing),
            Some(EXIT_DISCONNECTED) => Ok(SensorLink::Disconnected),
            other => anyhow::bail!(
                "connectivity probe exited with {other:?}: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        }
    }
}
