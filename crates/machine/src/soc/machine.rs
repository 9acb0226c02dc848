//! Machine state object.
//!
//! One explicit struct owns everything the CPU core can touch: the memory
//! image and the port bus (and through it the devices and console). The
//! runner owns the machine and lends it to the core for each step; there is
//! no global state anywhere in the harness.

use std::io::Write;

use super::bus::PortBus;
use super::devices::{BlockDevice, Console};
use super::memory::MemoryImage;
use crate::config::{Config, OutputMode};

/// Complete machine state presented to the CPU core's callbacks.
#[derive(Debug)]
pub struct Machine {
    /// Flat 64 KiB memory image.
    pub mem: MemoryImage,
    /// Port bus and the devices behind it.
    pub bus: PortBus,
}

impl Machine {
    /// Builds a machine from configuration with `console_sink` as the
    /// primary output stream.
    ///
    /// In memory-dump mode the console echo is muted so the halt-time dump
    /// is the only output the run produces.
    pub fn new(config: &Config, console_sink: Box<dyn Write>) -> Self {
        let toggle = config.devices.seek_toggle;
        let input = BlockDevice::new("stdin", config.devices.input_capacity, toggle);
        let fsdev = BlockDevice::new("fsdev", config.devices.fs_capacity, toggle);
        let echo = config.output == OutputMode::Console;
        let console = Console::new(console_sink, echo);

        Self {
            mem: MemoryImage::new(),
            bus: PortBus::new(input, fsdev, console),
        }
    }

    /// Memory read callback for the CPU core.
    #[inline]
    pub fn mem_read(&self, addr: u16) -> u8 {
        self.mem.read(addr)
    }

    /// Memory write callback for the CPU core.
    #[inline]
    pub fn mem_write(&mut self, addr: u16, value: u8) {
        self.mem.write(addr, value);
    }

    /// Port read callback for the CPU core.
    #[inline]
    pub fn io_read(&mut self, port: u16) -> u8 {
        self.bus.read(port)
    }

    /// Port write callback for the CPU core.
    #[inline]
    pub fn io_write(&mut self, port: u16, value: u8) {
        self.bus.write(port, value);
    }

    /// Writes the entire memory image to the console sink (memory-dump
    /// mode's halt output).
    ///
    /// # Errors
    ///
    /// Propagates the sink's I/O error.
    pub fn dump_memory(&mut self) -> std::io::Result<()> {
        self.bus.console_mut().write_raw(self.mem.as_slice())
    }
}
