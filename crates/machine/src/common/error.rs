//! Bootstrap error type.
//!
//! Only the bootstrap phase can fail: once execution starts, every fault the
//! hosted program can provoke (unknown ports, capacity overruns) is contained
//! and reported as a diagnostic rather than surfaced as an error.

use std::io;
use thiserror::Error;

/// Faults that can occur while preparing the machine for execution.
#[derive(Debug, Error)]
pub enum HostError {
    /// An image does not fit its target memory region or device.
    #[error("{name} image is {len} bytes but at most {max} fit at its load address")]
    ImageTooLarge {
        /// Which image overflowed ("kernel", "userspace", or "filesystem").
        name: &'static str,
        /// Actual image length in bytes.
        len: usize,
        /// Largest length that fits.
        max: usize,
    },

    /// Reading an image file or draining the external input stream failed.
    #[error("i/o failure during bootstrap: {0}")]
    Io(#[from] io::Error),

    /// A supplied configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
