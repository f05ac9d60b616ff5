use std::collections::VecDeque;

use serde::Deserialize;

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Which set of color brackets is active. Owned by the caller (see `App`),
/// never global.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Regular,
    Metaverse,
}

impl Palette {
    pub fn other(self) -> Self {
        match self {
            Self::Regular => Self::Metaverse,
            Self::Metaverse => Self::Regular,
        }
    }

    /// Label text for a palette, as shown on the toggle hint.
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "(regular colors)",
            Self::Metaverse => "(metaverse colors)",
        }
    }
}

// ─── Color token ─────────────────────────────────────────────────────────────

/// A display color. `name` is the literal identifier (hex code or CSS color
/// name) and is the stable contract; `rgb` is what the terminal renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorToken {
    name: &'static str,
    rgb: (u8, u8, u8),
}

impl ColorToken {
    pub const fn new(name: &'static str, rgb: (u8, u8, u8)) -> Self {
        Self { name, rgb }
    }

    pub fn as_str(&self) -> &'static str {
        self.name
    }

    pub fn color(&self) -> ratatui::style::Color {
        let (r, g, b) = self.rgb;
        ratatui::style::Color::Rgb(r, g, b)
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Shaper status ───────────────────────────────────────────────────────────

/// Host counts as exported by the shaper: `[shaped, unknown]`. `shaped` is
/// the number of shaped devices; `unknown` counts hosts seen on the wire
/// that matched none of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "(u32, u32)")]
pub struct HostCounts {
    pub shaped: u32,
    pub unknown: u32,
}

impl From<(u32, u32)> for HostCounts {
    fn from((shaped, unknown): (u32, u32)) -> Self {
        Self { shaped, unknown }
    }
}

/// One row of a top-N list: a host (optionally prefixed with its circuit
/// name) with its current rates and median TCP round trip.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HostStats {
    pub ip_address: String,
    /// (down, up)
    pub bits_per_second: (u64, u64),
    #[serde(default)]
    pub median_tcp_rtt: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardStatus {
    pub host_counts: HostCounts,
    #[serde(default)]
    pub reload_required: bool,
    #[serde(default)]
    pub top_downloaders: Vec<HostStats>,
    #[serde(default)]
    pub worst_rtt: Vec<HostStats>,
}

// ─── System sample ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemSample {
    /// Per-core usage, 0–100.
    pub cpu: Vec<f32>,
    pub ram_used: u64,
    pub ram_total: u64,
}

impl SystemSample {
    pub fn ram_percent(&self) -> f64 {
        if self.ram_total == 0 {
            0.0
        } else {
            self.ram_used as f64 / self.ram_total as f64 * 100.0
        }
    }
}

// ─── Throughput history ──────────────────────────────────────────────────────

/// Bits-per-second samples for the sparklines, oldest first.
pub struct ThroughputHistory {
    pub download: VecDeque<u64>,
    pub upload: VecDeque<u64>,
    pub max_points: usize,
}

impl ThroughputHistory {
    pub fn new(max_points: usize) -> Self {
        Self {
            download: VecDeque::from(vec![0; max_points]),
            upload: VecDeque::from(vec![0; max_points]),
            max_points,
        }
    }

    pub fn push(&mut self, down: u64, up: u64) {
        self.download.push_back(down);
        self.upload.push_back(up);
        while self.download.len() > self.max_points {
            self.download.pop_front();
        }
        while self.upload.len() > self.max_points {
            self.upload.pop_front();
        }
    }
}
