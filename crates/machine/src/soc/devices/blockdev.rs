//! Seekable block device.
//!
//! A block device is a fixed-capacity byte buffer exposed to the hosted
//! program through two 8-bit ports:
//! 1. **Data port:** One byte per access at the cursor, which advances on
//!    success. Reads at or past `size` return 0 without advancing; writes
//!    there are dropped. `size` is fixed at load time, so the data port can
//!    never grow a device.
//! 2. **Seek port:** Carries the 16-bit cursor across two consecutive
//!    same-direction accesses, high byte first. Two reads perform a tell;
//!    two writes perform a seek.
//!
//! Which half of a transfer comes next is tracked by a per-device phase.
//! Under the default `ToggleMode::Shared` discipline one phase serves both
//! directions, exactly like the reference hardware: the hosted program is
//! trusted to finish a tell before starting a seek, and interleaving them
//! desynchronizes the protocol with no detection. `ToggleMode::Independent`
//! gives each direction its own phase instead.

use tracing::debug;

use crate::config::ToggleMode;

/// Which half of a two-step 16-bit seek/tell transfer comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SeekPhase {
    /// The next access carries the high byte of the cursor.
    #[default]
    AwaitingHigh,
    /// The next access carries the low byte of the cursor.
    AwaitingLow,
}

/// A fixed-capacity, seekable byte buffer behind a data and a seek port.
pub struct BlockDevice {
    name: &'static str,
    buffer: Vec<u8>,
    size: usize,
    cursor: u16,
    toggle: ToggleMode,
    /// Phase of the tell (read) sequence; doubles as the single shared
    /// phase under `ToggleMode::Shared`.
    tell_phase: SeekPhase,
    /// Phase of the seek (write) sequence; only consulted under
    /// `ToggleMode::Independent`.
    seek_phase: SeekPhase,
}

impl BlockDevice {
    /// Creates an empty device.
    ///
    /// The buffer holds `capacity` bytes but `size` starts at zero, so the
    /// data port is inert until `load` supplies content.
    pub fn new(name: &'static str, capacity: usize, toggle: ToggleMode) -> Self {
        Self {
            name,
            buffer: vec![0; capacity],
            size: 0,
            cursor: 0,
            toggle,
            tell_phase: SeekPhase::AwaitingHigh,
            seek_phase: SeekPhase::AwaitingHigh,
        }
    }

    /// Loads `content` as the device's entire valid extent.
    ///
    /// Sets `size` to the content length, rewinds the cursor, and resets the
    /// seek/tell protocol. The bootstrap loader validates length against
    /// capacity before calling.
    pub fn load(&mut self, content: &[u8]) {
        assert!(
            content.len() <= self.buffer.len(),
            "{} device loaded with {} bytes (capacity {})",
            self.name,
            content.len(),
            self.buffer.len()
        );
        self.buffer[..content.len()].copy_from_slice(content);
        self.size = content.len();
        self.cursor = 0;
        self.tell_phase = SeekPhase::AwaitingHigh;
        self.seek_phase = SeekPhase::AwaitingHigh;
    }

    /// Device name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Length of the valid content loaded into the device.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current read/write offset.
    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    /// Byte at `offset`, ignoring the cursor. Test and inspection helper.
    pub fn peek(&self, offset: u16) -> u8 {
        self.buffer.get(usize::from(offset)).copied().unwrap_or(0)
    }

    /// Reads one byte at the cursor and advances it.
    ///
    /// At or past end of content this returns 0 and leaves the cursor where
    /// it is, so end-of-device reads are idempotent.
    pub fn read_data(&mut self) -> u8 {
        let pos = usize::from(self.cursor);
        if pos < self.size {
            self.cursor += 1;
            self.buffer[pos]
        } else {
            0
        }
    }

    /// Writes one byte at the cursor and advances it.
    ///
    /// Writes at or past end of content are silently dropped; `size` is a
    /// hard ceiling the data port cannot move.
    pub fn write_data(&mut self, value: u8) {
        let pos = usize::from(self.cursor);
        if pos < self.size {
            self.buffer[pos] = value;
            self.cursor += 1;
        }
    }

    /// Serves one read of the seek port (half of a tell).
    ///
    /// The first read returns the high byte of the cursor, the second the
    /// low byte.
    pub fn seek_read(&mut self) -> u8 {
        match self.tell_phase {
            SeekPhase::AwaitingHigh => {
                debug!(device = self.name, cursor = self.cursor, "tell");
                self.tell_phase = SeekPhase::AwaitingLow;
                (self.cursor >> 8) as u8
            }
            SeekPhase::AwaitingLow => {
                self.tell_phase = SeekPhase::AwaitingHigh;
                (self.cursor & 0x00FF) as u8
            }
        }
    }

    /// Serves one write to the seek port (half of a seek).
    ///
    /// The first write installs `value` as the high byte of the cursor and
    /// provisionally clears the low byte; the second completes the low byte.
    pub fn seek_write(&mut self, value: u8) {
        match self.seek_side() {
            SeekPhase::AwaitingHigh => {
                self.cursor = u16::from(value) << 8;
                self.set_seek_side(SeekPhase::AwaitingLow);
            }
            SeekPhase::AwaitingLow => {
                self.cursor |= u16::from(value);
                self.set_seek_side(SeekPhase::AwaitingHigh);
                debug!(device = self.name, cursor = self.cursor, "seek");
            }
        }
    }

    /// Phase governing the write (seek) direction under the active toggle
    /// discipline.
    fn seek_side(&self) -> SeekPhase {
        match self.toggle {
            ToggleMode::Shared => self.tell_phase,
            ToggleMode::Independent => self.seek_phase,
        }
    }

    fn set_seek_side(&mut self, phase: SeekPhase) {
        match self.toggle {
            ToggleMode::Shared => self.tell_phase = phase,
            ToggleMode::Independent => self.seek_phase = phase,
        }
    }
}

impl std::fmt::Debug for BlockDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockDevice")
            .field("name", &self.name)
            .field("capacity", &self.buffer.len())
            .field("size", &self.size)
            .field("cursor", &self.cursor)
            .field("toggle", &self.toggle)
            .finish_non_exhaustive()
    }
}
