//! Configuration for the hosting harness.
//!
//! This module defines the small set of knobs the harness exposes:
//! 1. **Output mode:** Normal console output, or a full memory dump at halt.
//! 2. **Devices:** Block device capacities and the seek-toggle discipline.
//!
//! Configuration is supplied as JSON (see `Config::from_json`) or use
//! `Config::default()` for the CLI defaults.

use serde::Deserialize;

use crate::common::constants;

/// What the process emits on its primary output stream.
///
/// The two modes are mutually exclusive for a run: under `MemoryDump` the
/// console bytes written by the hosted program are suppressed and the full
/// 64 KiB memory image is written verbatim once the program halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Emit bytes the hosted program writes through the console port.
    #[default]
    Console,
    /// Emit the final 64 KiB memory image instead of console bytes.
    MemoryDump,
}

/// Discipline of the two-phase seek/tell toggle on each block device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleMode {
    /// One toggle per device, shared by the tell (read) and seek (write)
    /// sequences. Byte-exact with the reference hardware: interleaving the
    /// two directions mid-sequence desynchronizes the protocol silently.
    #[default]
    Shared,
    /// Independent toggles per direction. Stricter than the reference
    /// hardware; an interleaved tell cannot corrupt an in-flight seek.
    Independent,
}

/// Block device parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Capacity of the stdin device; external input beyond this is discarded.
    pub input_capacity: usize,
    /// Capacity of the filesystem device.
    pub fs_capacity: usize,
    /// Seek-toggle discipline applied to both devices.
    pub seek_toggle: ToggleMode,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            input_capacity: constants::STDIN_CAPACITY,
            fs_capacity: constants::FS_CAPACITY,
            seek_toggle: ToggleMode::Shared,
        }
    }
}

/// Root harness configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Primary output stream mode.
    pub output: OutputMode,
    /// Block device parameters.
    pub devices: DeviceConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// Missing fields take their defaults, so `{}` is a valid configuration.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the text is not valid
    /// JSON or a field has the wrong shape.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
