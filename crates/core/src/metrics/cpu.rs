use crate::error::{CoreError, Result};
use std::fs;

const PROC_STAT: &str = "/proc/stat";

/// Cumulative CPU tick counters from the aggregate `cpu` line of /proc/stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSample {
    pub idle: u64,
    pub total: u64,
}

/// Read the current cumulative tick counters.
pub fn sample() -> Result<CpuSample> {
    let contents = fs::read_to_string(PROC_STAT)?;
    parse_stat(&contents)
}

/// Parse the first line of /proc/stat. `total` sums every column; `idle`
/// counts the idle and iowait columns.
pub fn parse_stat(contents: &str) -> Result<CpuSample> {
    let line = contents
        .lines()
        .next()
        .ok_or_else(|| CoreError::parse("empty stat data"))?;
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 || fields[0] != "cpu" {
        return Err(CoreError::parse("malformed cpu line in stat data"));
    }

    let mut total: u64 = 0;
    let mut idle: u64 = 0;
    for (i, field) in fields[1..].iter().enumerate() {
        let value: u64 = field.parse().unwrap_or(0);
        total = total.saturating_add(value);
        if i == 3 || i == 4 {
            idle = idle.saturating_add(value);
        }
    }
    Ok(CpuSample { idle, total })
}
