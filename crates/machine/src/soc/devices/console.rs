//! Write-only console sink.
//!
//! Every byte the hosted program writes through the console port is appended
//! to the sink immediately and in order; the sink is flushed exactly once,
//! by the runner after halt. In memory-dump mode the echo is muted so the
//! dump is the only thing on the output stream.

use std::io::{self, Write};

/// The process's primary output stream, as seen from the port bus.
pub struct Console {
    sink: Box<dyn Write>,
    echo: bool,
}

impl Console {
    /// Creates a console over `sink`.
    ///
    /// With `echo` false, bytes emitted by the hosted program are discarded;
    /// `write_raw` (the memory dump path) still reaches the sink.
    pub fn new(sink: Box<dyn Write>, echo: bool) -> Self {
        Self { sink, echo }
    }

    /// Whether hosted-program output reaches the sink.
    pub fn echoes(&self) -> bool {
        self.echo
    }

    /// Emits one byte from the hosted program.
    ///
    /// The sink is fire-and-forget: a failing write cannot abort execution,
    /// so errors are dropped.
    pub fn emit(&mut self, byte: u8) {
        if self.echo {
            let _ = self.sink.write_all(&[byte]);
        }
    }

    /// Writes bytes straight to the sink, bypassing the echo switch.
    ///
    /// # Errors
    ///
    /// Propagates the sink's I/O error.
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes)
    }

    /// Flushes the sink.
    ///
    /// # Errors
    ///
    /// Propagates the sink's I/O error.
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("echo", &self.echo)
            .finish_non_exhaustive()
    }
}
