//! Port-mapped pseudo-devices.
//!
//! Two kinds of device stand behind the bus: seekable block devices backed
//! by in-memory buffers, and the write-only console sink.

/// Seekable block device with the two-phase seek/tell protocol.
pub mod blockdev;
/// Write-only console byte sink.
pub mod console;

pub use blockdev::BlockDevice;
pub use console::Console;
