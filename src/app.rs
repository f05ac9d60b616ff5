use std::path::Path;
use std::time::Instant;

use crossterm::event::KeyCode;
use sysinfo::Networks;
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::network::speed::{bits_per_second, read_totals, InterfaceTotals};
use crate::network::status::StatusPoller;
use crate::network::system::SystemSampler;
use crate::palette::toggle_preference;
use crate::types::*;

/// Application state — owns all data, updated each tick.
pub struct App {
    // Palette
    pub palette: Palette,
    pub palette_label: &'static str,

    // Throughput
    pub history: ThroughputHistory,
    pub down_bps: u64,
    pub up_bps: u64,
    pub interface_name: String,
    prev_totals: Option<InterfaceTotals>,

    // Local host
    pub system: SystemSample,
    sampler: Option<SystemSampler>,

    // Shaper status
    pub status: Option<DashboardStatus>,
    poller: Option<StatusPoller>,

    pub session_start: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            palette: config.palette,
            palette_label: config.palette.other().label(),

            history: ThroughputHistory::new(config.history_len),
            down_bps: 0,
            up_bps: 0,
            interface_name: String::from("No Interface"),
            prev_totals: None,

            system: SystemSample::default(),
            sampler: None,

            status: None,
            poller: config
                .status_file
                .clone()
                .map(|path| StatusPoller::new(path, config.status_interval())),

            session_start: Instant::now(),
        }
    }

    /// Start local CPU/RAM sampling. Kept out of `new` so state logic can
    /// be exercised without touching the host.
    pub fn with_system_sampler(mut self) -> Self {
        self.sampler = Some(SystemSampler::new());
        self
    }

    /// Refresh throughput, system usage and shaper status. Called each tick.
    pub fn update(&mut self, networks: &mut Networks) {
        networks.refresh();
        let totals = read_totals(networks);
        if let Some(prev) = &self.prev_totals {
            let (down, up) = bits_per_second(prev, &totals);
            self.down_bps = down;
            self.up_bps = up;
            self.history.push(down, up);
            trace!(down, up, "throughput sample");
        }
        self.interface_name = totals.busiest.clone();
        self.prev_totals = Some(totals);

        if let Some(sampler) = &mut self.sampler {
            self.system = sampler.sample();
        }

        self.poll_status(Instant::now());
    }

    fn poll_status(&mut self, now: Instant) {
        let was_pending = self.reload_pending();
        let Some(poller) = &mut self.poller else {
            return;
        };
        if !poller.poll_due(now) {
            return;
        }
        match poller.poll(now) {
            Ok(status) => {
                if status.reload_required && !was_pending {
                    info!("shaper reports a reload is required");
                }
                self.status = Some(status);
            }
            Err(e) if e.is_not_found() => {
                debug!(path = %poller.path().display(), "status file not present yet");
            }
            Err(e) => warn!("status poll failed, keeping last status: {e}"),
        }
    }

    pub fn status_source(&self) -> Option<&Path> {
        self.poller.as_ref().map(|p| p.path())
    }

    fn reload_pending(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.reload_required)
    }

    pub fn toggle_palette(&mut self) {
        let (palette, label) = toggle_preference(self.palette);
        self.palette = palette;
        self.palette_label = label;
        info!(?palette, "palette toggled");
    }

    // ─── Input handling ──────────────────────────────────────────────────

    /// Handle a key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char('c') | KeyCode::Char('C') => self.toggle_palette(),
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn starts_with_configured_palette() {
        let config = Config {
            palette: Palette::Metaverse,
            ..Config::default()
        };
        let app = App::new(&config);
        assert_eq!(app.palette, Palette::Metaverse);
        assert_eq!(app.palette_label, "(regular colors)");
    }

    #[test]
    fn c_key_toggles_palette() {
        let mut app = App::new(&Config::default());
        assert!(!app.handle_key(KeyCode::Char('c')));
        assert_eq!(app.palette, Palette::Metaverse);
        assert_eq!(app.palette_label, "(regular colors)");

        assert!(!app.handle_key(KeyCode::Char('C')));
        assert_eq!(app.palette, Palette::Regular);
        assert_eq!(app.palette_label, "(metaverse colors)");
    }

    #[test]
    fn q_key_quits() {
        let mut app = App::new(&Config::default());
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn status_poll_keeps_last_good_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        let config = Config {
            status_file: Some(path.clone()),
            status_poll_secs: 0,
            ..Config::default()
        };
        let mut app = App::new(&config);
        let t0 = Instant::now();

        app.poll_status(t0);
        assert!(app.status.is_none());

        std::fs::write(&path, r#"{ "host_counts": [5, 1], "reload_required": true }"#).unwrap();
        app.poll_status(t0 + Duration::from_millis(1));
        assert_eq!(app.status.as_ref().map(|s| s.host_counts.shaped), Some(5));
        assert!(app.reload_pending());

        std::fs::write(&path, "not json").unwrap();
        app.poll_status(t0 + Duration::from_millis(2));
        assert_eq!(app.status.as_ref().map(|s| s.host_counts.shaped), Some(5));
    }

    #[test]
    fn no_status_file_means_no_polling() {
        let mut app = App::new(&Config {
            status_file: None::<PathBuf>,
            ..Config::default()
        });
        app.poll_status(Instant::now());
        assert!(app.status.is_none());
    }
}
