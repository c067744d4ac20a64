//! Host introspection — informational facts printed in command banners.

use crate::command_runner::CommandRunner;

/// Pretty OS name from `/etc/os-release`, when readable.
#[must_use]
pub fn os_pretty_name() -> Option<String> {
    let text = std::fs::read_to_string("/etc/os-release").ok()?;
    parse_os_release(&text)
}

fn parse_os_release(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|v| v.trim_matches('"').to_string())
}

/// `python3 --version` output, when python3 is on the PATH.
pub async fn python_version(runner: &impl CommandRunner) -> Option<String> {
    let output = runner.run("python3", &["--version"]).await.ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}
