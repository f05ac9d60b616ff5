use sysinfo::System;

use crate::types::SystemSample;

/// CPU and memory sampler. CPU usage is a delta between refreshes, so the
/// first sample after construction reads near zero.
pub struct SystemSampler {
    sys: System,
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSampler {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        Self { sys }
    }

    pub fn sample(&mut self) -> SystemSample {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();
        SystemSample {
            cpu: self.sys.cpus().iter().map(|c| c.cpu_usage()).collect(),
            ram_used: self.sys.used_memory(),
            ram_total: self.sys.total_memory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_memory_within_total() {
        let mut sampler = SystemSampler::default();
        let sample = sampler.sample();
        assert!(sample.ram_used <= sample.ram_total);
        assert!((0.0..=100.0).contains(&sample.ram_percent()));
    }
}
