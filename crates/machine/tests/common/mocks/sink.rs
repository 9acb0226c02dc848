//! Capturing console sink.
//!
//! Cloneable handle over shared storage: one clone goes into the machine as
//! the console sink, the test keeps another to read back what the run
//! emitted and how often it was flushed.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// A `Write` sink that records bytes and counts flushes.
#[derive(Clone, Default)]
pub struct CaptureSink {
    bytes: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<AtomicU32>,
}

impl CaptureSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.lock().unwrap().clone()
    }

    /// Number of flush calls observed.
    pub fn flush_count(&self) -> u32 {
        self.flushes.load(Ordering::Relaxed)
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = self.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
