use crate::error::{CoreError, Result};
use std::fs;

const PROC_LOADAVG: &str = "/proc/loadavg";
const PROC_UPTIME: &str = "/proc/uptime";

/// System load averages over 1, 5 and 15 minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAvg {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

pub fn load_avg() -> Result<LoadAvg> {
    let contents = fs::read_to_string(PROC_LOADAVG)?;
    parse_loadavg(&contents)
}

pub fn parse_loadavg(contents: &str) -> Result<LoadAvg> {
    let mut fields = contents.split_whitespace();
    let mut next = || -> Result<f64> {
        fields
            .next()
            .ok_or_else(|| CoreError::parse("truncated loadavg data"))?
            .parse()
            .map_err(|_| CoreError::parse("non-numeric loadavg field"))
    };
    Ok(LoadAvg {
        one: next()?,
        five: next()?,
        fifteen: next()?,
    })
}

/// Uptime in seconds. Conversion to hours happens at snapshot assembly.
pub fn uptime_secs() -> Result<f64> {
    let contents = fs::read_to_string(PROC_UPTIME)?;
    parse_uptime(&contents)
}

pub fn parse_uptime(contents: &str) -> Result<f64> {
    contents
        .split_whitespace()
        .next()
        .ok_or_else(|| CoreError::parse("empty uptime data"))?
        .parse()
        .map_err(|_| CoreError::parse("non-numeric uptime field"))
}
