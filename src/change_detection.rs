/*!
 * Change detection for incremental translation.
 *
 * A document needs translation when no target file exists yet, or when its
 * last substantive change is newer than the last completed run. The change
 * time comes from a ranked chain of timestamp providers: git commit history
 * first, filesystem modification time as fallback.
 */

use anyhow::{anyhow, Result};
use log::debug;
use std::path::Path;
use std::process::Command;
use std::time::UNIX_EPOCH;

/// Decide whether a document must be (re)translated.
///
/// A missing target always wins; otherwise the document is stale iff its
/// change time is strictly newer than the last completed run.
pub fn needs_translation(target_exists: bool, last_modified: i64, last_run: i64) -> bool {
    if !target_exists {
        return true;
    }
    last_modified > last_run
}

/// A source of "when did this document last change" timestamps. Providers
/// report `None` when they cannot answer for a path, letting the chain fall
/// through to the next one.
pub trait TimestampProvider {
    /// Provider name for diagnostics
    fn name(&self) -> &'static str;

    /// UNIX timestamp of the document's last change, if this provider can
    /// determine it
    fn change_time(&self, path: &Path) -> Option<i64>;
}

/// Last commit time of the file according to git history.
pub struct GitCommitTime;

impl TimestampProvider for GitCommitTime {
    fn name(&self) -> &'static str {
        "git"
    }

    fn change_time(&self, path: &Path) -> Option<i64> {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty())?;
        let file_name = path.file_name()?;
        let output = Command::new("git")
            .current_dir(parent)
            .args(["log", "-1", "--format=%at", "--"])
            .arg(file_name)
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Empty output means the file has no commit history
        stdout.trim().parse::<i64>().ok()
    }
}

/// Filesystem modification time of the file.
pub struct FileMtime;

impl TimestampProvider for FileMtime {
    fn name(&self) -> &'static str {
        "mtime"
    }

    fn change_time(&self, path: &Path) -> Option<i64> {
        let modified = std::fs::metadata(path).ok()?.modified().ok()?;
        let since_epoch = modified.duration_since(UNIX_EPOCH).ok()?;
        Some(since_epoch.as_secs() as i64)
    }
}

/// Resolve a document's last change time through the provider chain.
pub fn document_change_time(path: &Path) -> Result<i64> {
    let providers: [&dyn TimestampProvider; 2] = [&GitCommitTime, &FileMtime];
    for provider in providers {
        if let Some(timestamp) = provider.change_time(path) {
            debug!(
                "Change time for {:?} resolved via {}: {}",
                path,
                provider.name(),
                timestamp
            );
            return Ok(timestamp);
        }
    }
    Err(anyhow!("No change time available for: {:?}", path))
}
