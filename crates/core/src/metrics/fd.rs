use crate::error::{CoreError, Result};
use std::fs;

const PROC_FILE_NR: &str = "/proc/sys/fs/file-nr";

/// Open and maximum file handle counts. Both come from the same source, so
/// one read failure blanks both.
pub fn file_handles() -> Result<(u64, u64)> {
    let contents = fs::read_to_string(PROC_FILE_NR)?;
    parse_file_nr(&contents)
}

/// Parse /proc/sys/fs/file-nr: `allocated  unused  max`. On modern kernels
/// the allocated count approximates the handles actually in use.
pub fn parse_file_nr(contents: &str) -> Result<(u64, u64)> {
    let fields: Vec<&str> = contents.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(CoreError::parse("malformed file-nr data"));
    }
    let open = fields[0].parse().unwrap_or(0);
    let max = fields[2].parse().unwrap_or(0);
    Ok((open, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_nr() {
        let (open, max) = parse_file_nr("1280\t0\t131072\n").unwrap();
        assert_eq!(open, 1280);
        assert_eq!(max, 131072);
    }

    #[test]
    fn test_parse_file_nr_truncated() {
        assert!(parse_file_nr("1280 0\n").is_err());
        assert!(parse_file_nr("").is_err());
    }
}
