//! File logging. The terminal belongs to the UI, so nothing is written to
//! stdout or stderr while the dashboard runs.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("qosview").join("qosview.log"))
}

fn open_log() -> Option<File> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the global subscriber. Filter comes from `RUST_LOG`, falling back
/// to `qosview=info`. Without a writable log file logging stays off.
pub fn init() {
    let Some(file) = open_log() else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qosview=info"));
    // Errs only when a global subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
