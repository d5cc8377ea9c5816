use super::Collector;
use crate::cache::MetricsCache;
use crate::error::Result;
use crate::metrics::{battery, disk, fd, memory, system, temperature};
use crate::model::Metrics;
use crate::sampler;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

/// Linux collector: point reads from procfs/sysfs, plus a background
/// sampling loop feeding the rate-derived fields through the shared cache.
pub struct LinuxCollector {
    cache: Arc<MetricsCache>,
    // Stop handle for the running sampling loop, if any. Taken (not just
    // signalled) on stop so a second stop is a no-op.
    running: Mutex<Option<oneshot::Sender<()>>>,
}

impl LinuxCollector {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(MetricsCache::new()),
            running: Mutex::new(None),
        }
    }
}

impl Default for LinuxCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for LinuxCollector {
    fn start(&self, interval: Duration) {
        let mut running = self.running.lock().unwrap_or_else(|e| e.into_inner());
        if running.is_some() {
            log::warn!("collector already started, ignoring");
            return;
        }
        let (stop_tx, stop_rx) = oneshot::channel();
        tokio::spawn(sampler::run(Arc::clone(&self.cache), interval, stop_rx));
        *running = Some(stop_tx);
        log::info!("sampling every {interval:?}");
    }

    fn stop(&self) {
        let handle = self.running.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(stop_tx) = handle {
            // An already-exited loop has dropped its receiver; nothing to do.
            let _ = stop_tx.send(());
        }
    }

    fn metrics(&self) -> Result<Metrics> {
        let mut m = Metrics::default();

        // Rate-derived fields from the last completed tick.
        let rates = self.cache.read();
        m.cpu_usage_percent = rates.cpu_usage_percent;
        m.net_rx_kb = rates.net_rx_kb;
        m.net_tx_kb = rates.net_tx_kb;

        // Point reads. Each failure blanks its own fields only; mem/swap and
        // fd open/max share a source and blank together.
        if let Ok((mem, swap)) = memory::usage() {
            m.mem_usage_percent = mem;
            m.swap_usage_percent = swap;
        }
        if let Ok(free) = disk::free_gb("/") {
            m.disk_free_gb = free;
        }
        if let Ok(load) = system::load_avg() {
            m.load_1 = load.one;
            m.load_5 = load.five;
            m.load_15 = load.fifteen;
        }
        if let Ok(secs) = system::uptime_secs() {
            m.uptime_hours = secs / 3600.0;
        }
        if let Ok(temp) = temperature::cpu_temp_celsius() {
            m.cpu_temp_c = temp;
        }
        if let Ok((open, max)) = fd::file_handles() {
            m.fd_open = open;
            m.fd_max = max;
        }
        if let Ok(info) = battery::info() {
            m.battery_percent = info.percent;
            m.battery_status = info.status;
        }

        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_before_start_serves_zero_rates() {
        let collector = LinuxCollector::new();
        let m = collector.metrics().unwrap();
        assert_eq!(m.cpu_usage_percent, 0.0);
        assert_eq!(m.net_rx_kb, 0.0);
        // Point reads still populate independently of the loop.
        assert!(m.uptime_hours > 0.0);
        assert!(m.mem_usage_percent > 0.0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_lifecycle_is_idempotent() {
        let collector = LinuxCollector::new();
        collector.start(Duration::from_millis(50));
        // Second start must not spawn a second loop.
        collector.start(Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(140)).await;
        collector.stop();
        collector.stop();

        // Cached rate values survive the stop and no further ticks land.
        let first = collector.metrics().unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        let second = collector.metrics().unwrap();
        assert_eq!(first.cpu_usage_percent, second.cpu_usage_percent);
        assert_eq!(first.net_rx_kb, second.net_rx_kb);
        assert_eq!(first.net_tx_kb, second.net_tx_kb);
    }
}
