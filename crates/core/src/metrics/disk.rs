use crate::error::Result;
use nix::sys::statvfs::statvfs;

/// Free space on the filesystem backing `path`, in GB.
pub fn free_gb(path: &str) -> Result<f64> {
    let stat = statvfs(path)?;
    let free_bytes = stat.blocks_available() as f64 * stat.fragment_size() as f64;
    Ok(free_bytes / 1024.0 / 1024.0 / 1024.0)
}
