//! Candidate-path resolution and the config path patch.
//!
//! The shell installers repeated the same "try `raspberry_pi/<file>`, else
//! try `./<file>`" two-branch check at every file-dependent step. Here it is
//! a single resolution pass: the first candidate subdirectory containing
//! every required file becomes the application root, and all later steps use
//! that one root.

use std::path::{Path, PathBuf};

/// Return the path to `name` under the first candidate subdirectory of
/// `base` where it exists as a file.
#[must_use]
pub fn first_existing(base: &Path, candidates: &[String], name: &str) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|sub| base.join(sub).join(name))
        .find(|p| p.is_file())
}

/// Resolve the application root: the first candidate subdirectory of `base`
/// containing **all** of `required`.
///
/// # Errors
///
/// When no candidate qualifies, returns the files absent from every
/// candidate so the caller can print a remediation list. When every file
/// exists somewhere but no single candidate holds them all, the list names
/// the first candidate's gaps instead, so it is never empty.
pub fn resolve_app_root(
    base: &Path,
    candidates: &[String],
    required: &[String],
) -> Result<PathBuf, Vec<String>> {
    for sub in candidates {
        let root = base.join(sub);
        if required.iter().all(|f| root.join(f).is_file()) {
            return Ok(root);
        }
    }
    let missing: Vec<String> = required
        .iter()
        .filter(|f| first_existing(base, candidates, f).is_none())
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(missing);
    }
    // Files are split across candidates; report against the preferred one.
    let missing = candidates.first().map_or_else(
        || required.to_vec(),
        |sub| {
            let root = base.join(sub);
            required
                .iter()
                .filter(|f| !root.join(f).is_file())
                .cloned()
                .collect()
        },
    );
    Err(missing)
}

/// Replace every occurrence of the default install path in a configuration
/// file's text with the actual install path. Returns the patched text and
/// the number of occurrences replaced.
#[must_use]
pub fn substitute_install_path(content: &str, default: &str, actual: &str) -> (String, usize) {
    let count = content.matches(default).count();
    (content.replace(default, actual), count)
}
