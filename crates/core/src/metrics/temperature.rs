use crate::error::{CoreError, Result};
use std::fs;

const THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

/// CPU temperature in degrees Celsius. The thermal zone reports
/// millidegrees; hosts without a thermal sensor fail here and the collector
/// leaves the field at zero.
pub fn cpu_temp_celsius() -> Result<f64> {
    let contents = fs::read_to_string(THERMAL_ZONE)?;
    parse_millidegrees(&contents)
}

pub fn parse_millidegrees(contents: &str) -> Result<f64> {
    let raw: f64 = contents
        .trim()
        .parse()
        .map_err(|_| CoreError::parse("non-numeric thermal reading"))?;
    Ok(raw / 1000.0)
}
