//! Flat 64 KiB memory image.
//!
//! The image covers the full 16-bit address space, so every address the CPU
//! core can present is valid by construction and neither access path has a
//! failure mode. Region boundaries (kernel, userspace) are conventions of
//! the hosted image, not enforced here.

use crate::common::constants::MEM_SIZE;

/// The machine's entire addressable memory.
pub struct MemoryImage {
    bytes: Box<[u8; MEM_SIZE]>,
}

impl MemoryImage {
    /// Creates a zero-filled memory image.
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; MEM_SIZE]),
        }
    }

    /// Reads the byte at `addr`. Total over the address space.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr)]
    }

    /// Writes `value` at `addr`. Total over the address space.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[usize::from(addr)] = value;
    }

    /// Copies `data` into the image starting at `base`.
    ///
    /// Callers (the bootstrap loader) validate fit before loading; a slice
    /// that would run past the top of memory is a caller bug.
    pub fn write_slice(&mut self, base: u16, data: &[u8]) {
        let start = usize::from(base);
        assert!(
            start + data.len() <= MEM_SIZE,
            "image write out of bounds: {} bytes at {:#06x}",
            data.len(),
            base
        );
        self.bytes[start..start + data.len()].copy_from_slice(data);
    }

    /// Returns the whole image as a byte slice (for the halt-time dump).
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl Default for MemoryImage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryImage")
            .field("len", &MEM_SIZE)
            .finish_non_exhaustive()
    }
}
