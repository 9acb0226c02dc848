//! Port bus.
//!
//! Routes 8-bit port accesses to exactly one endpoint: the console, the
//! stdin device's data or seek port, or the filesystem device's data or
//! seek port. Port numbers are masked to their low 8 bits first, so only
//! 256 ports are addressable however wide a value the CPU core presents.
//!
//! Unknown ports are contained, never fatal: a read yields 0, a write is
//! ignored, and either emits a diagnostic identifying the access.
//!
//! The shared STDIO port is deliberately asymmetric: reads come from the
//! stdin device, writes go to the console. The stdin device's storage is
//! never addressed by a data-port write.

use tracing::warn;

use super::devices::{BlockDevice, Console};
use crate::common::constants::{FS_DATA_PORT, FS_SEEK_PORT, STDIN_SEEK_PORT, STDIO_PORT};

/// Dispatcher for the machine's four recognized I/O ports.
#[derive(Debug)]
pub struct PortBus {
    input: BlockDevice,
    fsdev: BlockDevice,
    console: Console,
}

impl PortBus {
    /// Creates a bus over the two block devices and the console.
    pub fn new(input: BlockDevice, fsdev: BlockDevice, console: Console) -> Self {
        Self {
            input,
            fsdev,
            console,
        }
    }

    /// Reads one byte from `port` (masked to its low 8 bits).
    pub fn read(&mut self, port: u16) -> u8 {
        match (port & 0x00FF) as u8 {
            STDIO_PORT => self.input.read_data(),
            STDIN_SEEK_PORT => self.input.seek_read(),
            FS_DATA_PORT => self.fsdev.read_data(),
            FS_SEEK_PORT => self.fsdev.seek_read(),
            other => {
                warn!(port = other, "out of bounds I/O read");
                0
            }
        }
    }

    /// Writes one byte to `port` (masked to its low 8 bits).
    pub fn write(&mut self, port: u16, value: u8) {
        match (port & 0x00FF) as u8 {
            // Writes on the shared STDIO port address the console, not the
            // stdin device.
            STDIO_PORT => self.console.emit(value),
            STDIN_SEEK_PORT => self.input.seek_write(value),
            FS_DATA_PORT => self.fsdev.write_data(value),
            FS_SEEK_PORT => self.fsdev.seek_write(value),
            other => warn!(port = other, value, "out of bounds I/O write"),
        }
    }

    /// Stdin block device.
    pub fn input(&self) -> &BlockDevice {
        &self.input
    }

    /// Stdin block device, mutably (bootstrap and tests).
    pub fn input_mut(&mut self) -> &mut BlockDevice {
        &mut self.input
    }

    /// Filesystem block device.
    pub fn fsdev(&self) -> &BlockDevice {
        &self.fsdev
    }

    /// Filesystem block device, mutably (bootstrap and tests).
    pub fn fsdev_mut(&mut self) -> &mut BlockDevice {
        &mut self.fsdev
    }

    /// Console sink, mutably (runner flush and dump).
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }
}
