/*!
 * Persisted run state: the UNIX timestamp of the last completed translation
 * pass, stored as a single decimal number in a text file.
 *
 * The state is an explicit object owned by the controller rather than ambient
 * process state. It is rewritten after every processed document so an
 * interrupted walk only redoes documents changed after the last persisted
 * write.
 */

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;

/// Timestamp of the last fully completed run, backed by a state file.
#[derive(Debug, Clone)]
pub struct RunState {
    path: PathBuf,
    last_run: i64,
}

impl RunState {
    /// Load the run state from `path`. A missing file reads as timestamp 0,
    /// which makes a first run translate everything.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let last_run = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read run state file: {:?}", path))?;
            raw.trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid timestamp in run state file: {:?}", path))?
        } else {
            0
        };
        Ok(Self { path, last_run })
    }

    /// Timestamp read at run start. Change detection compares against this
    /// value for the whole walk, even as newer timestamps are persisted.
    pub fn last_run(&self) -> i64 {
        self.last_run
    }

    /// Persist the current time as the last completed document entry. The
    /// in-memory run-start timestamp is left untouched.
    pub fn touch(&self) -> Result<()> {
        let now = Utc::now().timestamp();
        if let Some(parent) = self.path.parent() {
            FileManager::ensure_dir(parent)?;
        }
        fs::write(&self.path, now.to_string())
            .with_context(|| format!("Failed to write run state file: {:?}", self.path))
    }
}
