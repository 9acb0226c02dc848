//! Emulated hardware.
//!
//! This module organizes the components the CPU core is wired to: the flat
//! memory image, the block devices and console, the port bus that dispatches
//! I/O to them, and the machine-state object that owns the lot.

/// Port bus dispatching 8-bit port accesses to devices.
pub mod bus;
/// Block devices and the console sink.
pub mod devices;
/// Machine state object (memory plus port bus).
pub mod machine;
/// Flat 64 KiB memory image.
pub mod memory;

pub use machine::Machine;
