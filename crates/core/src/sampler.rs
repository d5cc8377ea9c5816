//! Rate engine and background sampling loop.
//!
//! Counters exposed by the kernel (CPU ticks, network bytes) are cumulative;
//! turning them into rates takes two successive samples and the interval
//! between them. `RateTracker` holds the previous tick's baselines, the
//! async loop drives it on a timer and publishes into the shared cache.

use crate::cache::{MetricsCache, RateUpdate};
use crate::error::Result;
use crate::metrics::{cpu, network, CpuSample, NetSample};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;

/// CPU utilization over one interval: `(1 - Δidle/Δtotal) * 100`.
///
/// A counter reset or zero-width interval (`Δtotal <= 0`) yields 0 rather
/// than dividing by zero or reporting garbage; the result is clamped to
/// [0, 100].
pub fn cpu_usage_percent(prev: CpuSample, curr: CpuSample) -> f64 {
    if curr.total <= prev.total {
        return 0.0;
    }
    let delta_total = (curr.total - prev.total) as f64;
    let delta_idle = curr.idle.saturating_sub(prev.idle) as f64;
    ((1.0 - delta_idle / delta_total) * 100.0).clamp(0.0, 100.0)
}

/// Byte-counter delta converted to KB/s. A counter reset (`curr < prev`)
/// yields 0 rather than a negative rate.
pub fn byte_rate_kb(prev: u64, curr: u64, interval_secs: f64) -> f64 {
    if interval_secs <= 0.0 || curr < prev {
        return 0.0;
    }
    (curr - prev) as f64 / interval_secs / 1024.0
}

/// Converts successive counter samples into instantaneous rates.
///
/// Each counter's baseline advances only when that counter's sampling
/// succeeded, so a failed CPU read never corrupts the network baseline and
/// vice versa. The baselines are private to the sampling task.
pub struct RateTracker {
    interval_secs: f64,
    prev_cpu: Option<CpuSample>,
    prev_net: Option<NetSample>,
}

impl RateTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval_secs: interval.as_secs_f64(),
            prev_cpu: None,
            prev_net: None,
        }
    }

    /// Seed the baselines before the loop starts, so the first tick already
    /// has a previous value to compute deltas against.
    pub fn warm_up(&mut self, cpu: Option<CpuSample>, net: Option<NetSample>) {
        self.prev_cpu = cpu;
        self.prev_net = net;
    }

    /// Fold one tick's counter readings into rate values. A `None` reading
    /// (failed sampling) produces no update for that counter and leaves its
    /// baseline untouched.
    pub fn tick(&mut self, cpu: Option<CpuSample>, net: Option<NetSample>) -> RateUpdate {
        let mut update = RateUpdate::default();

        if let Some(sample) = cpu {
            if let Some(prev) = self.prev_cpu {
                update.cpu_usage_percent = Some(cpu_usage_percent(prev, sample));
            }
            self.prev_cpu = Some(sample);
        }

        if let Some(sample) = net {
            if let Some(prev) = self.prev_net {
                update.net_rates_kb = Some((
                    byte_rate_kb(prev.rx_bytes, sample.rx_bytes, self.interval_secs),
                    byte_rate_kb(prev.tx_bytes, sample.tx_bytes, self.interval_secs),
                ));
            }
            self.prev_net = Some(sample);
        }

        update
    }
}

fn checked<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{what} sampling failed: {e}");
            None
        }
    }
}

/// Background sampling loop: warm up the baselines, then on every tick take
/// fresh counter samples, compute rates and publish them into the cache.
/// Exits promptly when the stop channel fires or its sender is dropped.
pub async fn run(cache: Arc<MetricsCache>, interval: Duration, mut stop: oneshot::Receiver<()>) {
    let mut tracker = RateTracker::new(interval);
    tracker.warm_up(
        checked("cpu", cpu::sample()),
        checked("network", network::sample()),
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately; consume it
    // so the loop body only runs on real interval boundaries.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let update = tracker.tick(
                    checked("cpu", cpu::sample()),
                    checked("network", network::sample()),
                );
                cache.apply(update);
            }
            _ = &mut stop => {
                log::debug!("sampling loop stopped");
                return;
            }
        }
    }
}
