#[cfg(not(target_os = "linux"))]
pub mod generic;
#[cfg(target_os = "linux")]
pub mod linux;

use crate::{error::Result, model::Metrics};
use std::time::Duration;

/// A host metrics collector.
///
/// One instance lives for the whole process: `start` spawns the background
/// sampling loop, `metrics` assembles a snapshot on demand, `stop` shuts the
/// loop down. `metrics` is callable in any lifecycle state; before the first
/// completed tick (or after `stop`) the rate-derived fields simply hold
/// whatever the cache holds.
pub trait Collector: Send + Sync {
    /// Begin periodic sampling. Starting an already running collector is a
    /// no-op.
    fn start(&self, interval: Duration);

    /// Signal the sampling loop to exit at the next tick boundary. Safe to
    /// call more than once.
    fn stop(&self);

    /// Assemble the latest snapshot: cached rate values merged with fresh
    /// point reads. Individual read failures blank their own fields only,
    /// so the call never fails by design.
    fn metrics(&self) -> Result<Metrics>;
}

/// Build the collector for the current target.
pub fn new_collector() -> Box<dyn Collector> {
    #[cfg(target_os = "linux")]
    {
        Box::new(linux::LinuxCollector::new())
    }

    #[cfg(not(target_os = "linux"))]
    {
        Box::new(generic::GenericCollector::new())
    }
}
