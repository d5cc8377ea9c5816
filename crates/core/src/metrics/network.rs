use crate::error::Result;
use std::fs;

const PROC_NET_DEV: &str = "/proc/net/dev";

/// Cumulative receive/transmit byte counters summed across interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetSample {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Read the current cumulative byte counters.
pub fn sample() -> Result<NetSample> {
    let contents = fs::read_to_string(PROC_NET_DEV)?;
    parse_net_dev(&contents)
}

/// Sum rx/tx byte counters over every /proc/net/dev row, skipping the two
/// header rows (they contain `|`) and the loopback interface.
pub fn parse_net_dev(contents: &str) -> Result<NetSample> {
    let mut rx_bytes: u64 = 0;
    let mut tx_bytes: u64 = 0;

    for line in contents.lines() {
        if line.contains('|') || line.contains("lo:") {
            continue;
        }
        let cleaned = line.replace(':', " ");
        let fields: Vec<&str> = cleaned.split_whitespace().collect();
        if fields.len() < 10 {
            continue;
        }
        rx_bytes = rx_bytes.saturating_add(fields[1].parse().unwrap_or(0));
        tx_bytes = tx_bytes.saturating_add(fields[9].parse().unwrap_or(0));
    }

    Ok(NetSample { rx_bytes, tx_bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:  999999    1000    0    0    0     0          0         0   999999    1000    0    0    0     0       0          0
  eth0: 1048576    2048    0    0    0     0          0         0   524288    1024    0    0    0     0       0          0
 wlan0:  262144     512    0    0    0     0          0         0   131072     256    0    0    0     0       0          0
";

    #[test]
    fn test_parse_net_dev_sums_interfaces_without_loopback() {
        let sample = parse_net_dev(NET_DEV).unwrap();
        assert_eq!(sample.rx_bytes, 1048576 + 262144);
        assert_eq!(sample.tx_bytes, 524288 + 131072);
    }

    #[test]
    fn test_parse_net_dev_tolerates_short_rows() {
        let sample = parse_net_dev("  eth0: 100 1\n").unwrap();
        assert_eq!(sample, NetSample { rx_bytes: 0, tx_bytes: 0 });
    }

    #[test]
    fn test_parse_net_dev_empty_input_is_zero() {
        let sample = parse_net_dev("").unwrap();
        assert_eq!(sample, NetSample { rx_bytes: 0, tx_bytes: 0 });
    }
}
