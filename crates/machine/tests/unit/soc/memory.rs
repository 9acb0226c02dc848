//! Memory Image Unit Tests.
//!
//! Verifies totality over the 16-bit address space, slice loading, and the
//! dump view.

use pretty_assertions::assert_eq;
use zhost_core::soc::memory::MemoryImage;

#[test]
fn memory_initially_zeroed() {
    let mem = MemoryImage::new();
    assert_eq!(mem.read(0x0000), 0);
    assert_eq!(mem.read(0x4800), 0);
    assert_eq!(mem.read(0xFFFF), 0);
}

#[test]
fn memory_write_read_at_extremes() {
    let mut mem = MemoryImage::new();
    mem.write(0x0000, 0xAB);
    mem.write(0xFFFF, 0xCD);
    assert_eq!(mem.read(0x0000), 0xAB);
    assert_eq!(mem.read(0xFFFF), 0xCD);
}

#[test]
fn memory_every_address_is_writable() {
    let mut mem = MemoryImage::new();
    // Sample the space densely enough to catch any offset arithmetic slip.
    for addr in (0..=0xFFFFu16).step_by(257) {
        mem.write(addr, (addr >> 8) as u8);
    }
    for addr in (0..=0xFFFFu16).step_by(257) {
        assert_eq!(mem.read(addr), (addr >> 8) as u8);
    }
}

#[test]
fn memory_write_is_visible_to_next_read() {
    let mut mem = MemoryImage::new();
    mem.write(0x1234, 1);
    mem.write(0x1234, 2);
    assert_eq!(mem.read(0x1234), 2);
}

#[test]
fn memory_write_slice_places_bytes() {
    let mut mem = MemoryImage::new();
    mem.write_slice(0x4800, &[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(mem.read(0x4800), 0xDE);
    assert_eq!(mem.read(0x4803), 0xEF);
    assert_eq!(mem.read(0x4804), 0);
}

#[test]
fn memory_as_slice_covers_full_space() {
    let mut mem = MemoryImage::new();
    mem.write(0xFFFF, 0x99);
    let slice = mem.as_slice();
    assert_eq!(slice.len(), 0x1_0000);
    assert_eq!(slice[0xFFFF], 0x99);
}
