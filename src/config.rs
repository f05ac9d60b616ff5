use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::Palette;

/// User settings from `<config_dir>/qosview/config.json`. Every field is
/// optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_ms: u64,
    /// Palette at startup. Toggling at runtime is not written back.
    pub palette: Palette,
    pub status_file: Option<PathBuf>,
    pub status_poll_secs: u64,
    pub history_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            palette: Palette::Regular,
            status_file: None,
            status_poll_secs: 1,
            history_len: 60,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("qosview").join("config.json"))
    }

    /// Load from the default location. No config dir or no file means defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(Error::Config("tick_ms must be greater than zero".into()));
        }
        if self.history_len == 0 {
            return Err(Error::Config("history_len must be greater than zero".into()));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_secs(self.status_poll_secs)
    }
}
