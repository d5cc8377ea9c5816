use std::sync::RwLock;

/// The rate-derived values published by the sampling loop: overall CPU
/// utilization and aggregate network throughput.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateValues {
    pub cpu_usage_percent: f64,
    pub net_rx_kb: f64,
    pub net_tx_kb: f64,
}

/// One tick's worth of updates. A `None` means that counter's sampling
/// failed this tick and the cached value must be left as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateUpdate {
    pub cpu_usage_percent: Option<f64>,
    pub net_rates_kb: Option<(f64, f64)>,
}

impl RateUpdate {
    pub fn is_empty(&self) -> bool {
        self.cpu_usage_percent.is_none() && self.net_rates_kb.is_none()
    }
}

/// Latest rate values, written once per tick by the sampling loop and read
/// by any number of concurrent snapshot requests.
///
/// Readers never observe a half-updated cache: everything carried by one
/// `RateUpdate` lands under a single write-lock acquisition.
#[derive(Debug, Default)]
pub struct MetricsCache {
    inner: RwLock<RateValues>,
}

impl MetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy out the current values under the read lock.
    pub fn read(&self) -> RateValues {
        *self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Apply one tick's updates under a single write-lock acquisition.
    pub fn apply(&self, update: RateUpdate) {
        if update.is_empty() {
            return;
        }
        let mut values = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if let Some(cpu) = update.cpu_usage_percent {
            values.cpu_usage_percent = cpu;
        }
        if let Some((rx, tx)) = update.net_rates_kb {
            values.net_rx_kb = rx;
            values.net_tx_kb = tx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_cache_is_zeroed() {
        let cache = MetricsCache::new();
        assert_eq!(cache.read(), RateValues::default());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let cache = MetricsCache::new();
        cache.apply(RateUpdate {
            cpu_usage_percent: Some(55.0),
            net_rates_kb: Some((1.0, 2.0)),
        });

        // Failed net sampling: only CPU moves, stale rates persist.
        cache.apply(RateUpdate {
            cpu_usage_percent: Some(60.0),
            net_rates_kb: None,
        });
        let values = cache.read();
        assert_eq!(values.cpu_usage_percent, 60.0);
        assert_eq!(values.net_rx_kb, 1.0);
        assert_eq!(values.net_tx_kb, 2.0);

        // Failed CPU sampling: rates move, CPU persists.
        cache.apply(RateUpdate {
            cpu_usage_percent: None,
            net_rates_kb: Some((3.0, 4.0)),
        });
        let values = cache.read();
        assert_eq!(values.cpu_usage_percent, 60.0);
        assert_eq!(values.net_rx_kb, 3.0);
        assert_eq!(values.net_tx_kb, 4.0);
    }

    #[test]
    fn test_concurrent_readers_never_see_torn_state() {
        // The writer always publishes coupled triples (k, 2k, 3k); any torn
        // read would break the relationship.
        let cache = Arc::new(MetricsCache::new());
        cache.apply(RateUpdate {
            cpu_usage_percent: Some(0.0),
            net_rates_kb: Some((0.0, 0.0)),
        });

        let writer = {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for k in 1..=1000u32 {
                    let k = f64::from(k);
                    cache.apply(RateUpdate {
                        cpu_usage_percent: Some(k),
                        net_rates_kb: Some((k * 2.0, k * 3.0)),
                    });
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        let v = cache.read();
                        assert_eq!(v.net_rx_kb, v.cpu_usage_percent * 2.0);
                        assert_eq!(v.net_tx_kb, v.cpu_usage_percent * 3.0);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
