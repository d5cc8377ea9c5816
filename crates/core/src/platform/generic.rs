use super::Collector;
use crate::error::Result;
use crate::model::{BatteryStatus, Metrics};
use std::path::Path;
use std::time::Duration;
use sysinfo::{Disks, System};

/// Fallback collector for targets without procfs.
///
/// Point reads come from sysinfo; there is no sampling loop, so the
/// rate-derived fields stay at zero. Satisfies the same contract as the
/// Linux collector: never errors, always returns a well-formed snapshot.
pub struct GenericCollector;

impl GenericCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenericCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for GenericCollector {
    fn start(&self, _interval: Duration) {
        log::warn!("rate sampling is not supported on this target");
    }

    fn stop(&self) {}

    fn metrics(&self) -> Result<Metrics> {
        let mut m = Metrics::default();

        let mut sys = System::new();
        sys.refresh_memory();

        let mem_total = sys.total_memory() as f64;
        if mem_total > 0.0 {
            m.mem_usage_percent = (mem_total - sys.available_memory() as f64) / mem_total * 100.0;
        }
        let swap_total = sys.total_swap() as f64;
        if swap_total > 0.0 {
            m.swap_usage_percent = sys.used_swap() as f64 / swap_total * 100.0;
        }

        let load = System::load_average();
        m.load_1 = load.one;
        m.load_5 = load.five;
        m.load_15 = load.fifteen;
        m.uptime_hours = System::uptime() as f64 / 3600.0;

        let disks = Disks::new_with_refreshed_list();
        if let Some(root) = disks
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))
        {
            m.disk_free_gb = root.available_space() as f64 / 1024.0 / 1024.0 / 1024.0;
        }

        // No battery source on this path; report the desktop default.
        m.battery_percent = 100;
        m.battery_status = BatteryStatus::AcPower;

        Ok(m)
    }
}
