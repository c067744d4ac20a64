//! `version` command — show the tool version.

use anyhow::Result;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the version, as JSON when requested.
///
/// # Errors
///
/// Infallible; returns `Result` for dispatch uniformity.
pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::json!({ "version": VERSION }));
    } else {
        println!("thermopi {VERSION}");
    }
    Ok(())
}
