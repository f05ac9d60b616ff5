use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::types::{DashboardStatus, HostCounts};
use crate::utils::scale_number;

/// Read the shaper's status export.
pub fn read_status(path: &Path) -> Result<DashboardStatus> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// The reload badge shows only once a status has been read and it asks for a reload.
pub fn show_reload_warning(status: Option<&DashboardStatus>) -> bool {
    status.is_some_and(|s| s.reload_required)
}

pub fn host_count_label(counts: &HostCounts) -> String {
    format!(
        "{} shaped, {} unknown",
        scale_number(counts.shaped as f64),
        scale_number(counts.unknown as f64)
    )
}

/// Rate-limited reader for the status file.
pub struct StatusPoller {
    path: PathBuf,
    interval: Duration,
    last_poll: Option<Instant>,
}

impl StatusPoller {
    pub fn new(path: PathBuf, interval: Duration) -> Self {
        Self {
            path,
            interval,
            last_poll: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn poll_due(&self, now: Instant) -> bool {
        match self.last_poll {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Read the file and mark the poll time, successful or not.
    pub fn poll(&mut self, now: Instant) -> Result<DashboardStatus> {
        self.last_poll = Some(now);
        read_status(&self.path)
    }
}
