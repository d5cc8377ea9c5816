pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod platform;
pub mod sampler;

pub use cache::{MetricsCache, RateUpdate, RateValues};
pub use config::Config;
pub use error::{CoreError, Result};
pub use model::{BatteryStatus, Metrics};
pub use platform::{new_collector, Collector};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.interval_ms, 1000);
        assert_eq!(config.listen.port(), 8085);
    }

    #[test]
    fn test_collector_for_this_target() {
        let collector = new_collector();
        // Callable before start; rate fields are zero, the call succeeds.
        let metrics = collector.metrics().unwrap();
        assert_eq!(metrics.cpu_usage_percent, 0.0);
        assert_eq!(metrics.net_rx_kb, 0.0);
        assert_eq!(metrics.net_tx_kb, 0.0);
    }
}
