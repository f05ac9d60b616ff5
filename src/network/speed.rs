use std::time::Instant;

use sysinfo::Networks;

/// Byte counters summed over every interface at one instant.
#[derive(Clone, Debug)]
pub struct InterfaceTotals {
    pub received: u64,
    pub transmitted: u64,
    /// Interface with the most lifetime traffic.
    pub busiest: String,
    pub at: Instant,
}

pub fn read_totals(networks: &Networks) -> InterfaceTotals {
    let mut received: u64 = 0;
    let mut transmitted: u64 = 0;
    let mut busiest = String::from("No Interface");
    let mut best: u64 = 0;

    for (name, data) in networks.iter() {
        let r = data.total_received();
        let t = data.total_transmitted();
        received = received.saturating_add(r);
        transmitted = transmitted.saturating_add(t);
        if r.saturating_add(t) > best {
            best = r.saturating_add(t);
            busiest = name.to_string();
        }
    }
    InterfaceTotals {
        received,
        transmitted,
        busiest,
        at: Instant::now(),
    }
}

/// Bits per second (down, up) between two readings. Counter resets read as zero.
pub fn bits_per_second(prev: &InterfaceTotals, now: &InterfaceTotals) -> (u64, u64) {
    let secs = now.at.saturating_duration_since(prev.at).as_secs_f64();
    if secs <= 0.0 {
        return (0, 0);
    }
    let down = now.received.saturating_sub(prev.received) as f64 * 8.0 / secs;
    let up = now.transmitted.saturating_sub(prev.transmitted) as f64 * 8.0 / secs;
    (down as u64, up as u64)
}
