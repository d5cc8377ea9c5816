use serde::{Deserialize, Serialize};

/// Battery charge state as reported by the power supply class, plus the
/// fixed fallback used on hosts without a battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryStatus {
    Charging,
    Discharging,
    Full,
    #[serde(rename = "AC_Power")]
    AcPower,
    Unknown,
}

impl Default for BatteryStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl BatteryStatus {
    /// Map a sysfs `status` string; anything unrecognized is `Unknown`.
    pub fn from_sysfs(raw: &str) -> Self {
        match raw.trim() {
            "Charging" => Self::Charging,
            "Discharging" => Self::Discharging,
            "Full" => Self::Full,
            _ => Self::Unknown,
        }
    }
}

/// One complete metrics snapshot as served over the wire.
///
/// Every field defaults to its zero value; a failed sub-reading leaves its
/// fields zeroed rather than aborting the snapshot. Field names are the wire
/// format and must not change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub cpu_usage_percent: f64,
    pub mem_usage_percent: f64,
    pub swap_usage_percent: f64,
    pub disk_free_gb: f64,

    pub load_1: f64,
    pub load_5: f64,
    pub load_15: f64,
    pub uptime_hours: f64,

    pub fd_open: u64,
    pub fd_max: u64,

    pub cpu_temp_c: f64,
    pub battery_percent: u8,
    pub battery_status: BatteryStatus,

    pub net_rx_kb: f64,
    pub net_tx_kb: f64,
}
