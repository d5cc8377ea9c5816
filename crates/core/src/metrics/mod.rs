//! Raw readers and counter samplers.
//!
//! Each submodule reads exactly one OS-exposed data source and carries no
//! state. Parsing is split out over `&str` so the readers stay unit-testable
//! without a live /proc.

pub mod battery;
pub mod cpu;
#[cfg(unix)]
pub mod disk;
pub mod fd;
pub mod memory;
pub mod network;
pub mod system;
pub mod temperature;

pub use battery::BatteryInfo;
pub use cpu::CpuSample;
pub use network::NetSample;
pub use system::LoadAvg;
