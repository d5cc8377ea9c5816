use crate::error::{CoreError, Result};
use crate::model::BatteryStatus;
use std::fs;
use std::path::Path;

const POWER_SUPPLY: &str = "/sys/class/power_supply/BAT0";

/// Battery charge percentage and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryInfo {
    pub percent: u8,
    pub status: BatteryStatus,
}

/// Read battery charge and status. Hosts without a battery (no BAT0
/// directory) report a fixed "fully charged, on AC" reading rather than an
/// error.
pub fn info() -> Result<BatteryInfo> {
    read_from(Path::new(POWER_SUPPLY))
}

pub(crate) fn read_from(base: &Path) -> Result<BatteryInfo> {
    if !base.exists() {
        return Ok(BatteryInfo {
            percent: 100,
            status: BatteryStatus::AcPower,
        });
    }

    let capacity = fs::read_to_string(base.join("capacity"))?;
    let percent = capacity
        .trim()
        .parse()
        .map_err(|_| CoreError::parse("non-numeric battery capacity"))?;

    // A readable capacity with an unreadable status still yields a snapshot.
    let status = match fs::read_to_string(base.join("status")) {
        Ok(raw) => BatteryStatus::from_sysfs(&raw),
        Err(_) => BatteryStatus::Unknown,
    };

    Ok(BatteryInfo { percent, status })
}
