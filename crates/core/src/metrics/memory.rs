use crate::error::Result;
use std::fs;

const PROC_MEMINFO: &str = "/proc/meminfo";

/// Memory and swap utilization percentages. Both come from the same source,
/// so one read failure blanks both.
pub fn usage() -> Result<(f64, f64)> {
    let contents = fs::read_to_string(PROC_MEMINFO)?;
    parse_meminfo(&contents)
}

/// Parse /proc/meminfo into `(mem_usage_percent, swap_usage_percent)`.
/// Swap usage is 0 when swap is disabled (SwapTotal = 0).
pub fn parse_meminfo(contents: &str) -> Result<(f64, f64)> {
    let mut mem_total = 0.0;
    let mut mem_available = 0.0;
    let mut swap_total = 0.0;
    let mut swap_free = 0.0;

    for line in contents.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            continue;
        }
        let value: f64 = fields[1].parse().unwrap_or(0.0);
        match fields[0] {
            "MemTotal:" => mem_total = value,
            "MemAvailable:" => mem_available = value,
            "SwapTotal:" => swap_total = value,
            "SwapFree:" => swap_free = value,
            _ => {}
        }
    }

    let mem_usage = if mem_total > 0.0 {
        (mem_total - mem_available) / mem_total * 100.0
    } else {
        0.0
    };
    let swap_usage = if swap_total > 0.0 {
        (swap_total - swap_free) / swap_total * 100.0
    } else {
        0.0
    };

    Ok((mem_usage, swap_usage))
}
