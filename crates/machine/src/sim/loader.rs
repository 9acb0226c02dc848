//! Bootstrap loader.
//!
//! Populates the machine exactly once before execution: the kernel image at
//! 0x0000 and the userspace image at 0x4800 in memory, the filesystem image
//! into the filesystem device, and the entire external input stream into the
//! stdin device. Nothing here runs again after the CPU core starts stepping.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::common::constants::{KERNEL_BASE, MEM_SIZE, USER_CODE};
use crate::common::error::HostError;
use crate::soc::Machine;

/// Reads an image file from disk.
///
/// # Errors
///
/// Returns `HostError::Io` when the file cannot be read.
pub fn read_image(path: &Path) -> Result<Vec<u8>, HostError> {
    Ok(fs::read(path)?)
}

/// Places the three images into the machine.
///
/// The kernel lands at 0x0000, the userspace image at 0x4800, and the
/// filesystem image becomes the filesystem device's content (its `size` set
/// to the image length, cursor rewound). The images themselves are opaque;
/// only their lengths are checked.
///
/// # Errors
///
/// Returns `HostError::ImageTooLarge` when an image does not fit its target
/// region or device.
pub fn load_images(
    machine: &mut Machine,
    kernel: &[u8],
    user: &[u8],
    fs_image: &[u8],
) -> Result<(), HostError> {
    if kernel.len() > MEM_SIZE {
        return Err(HostError::ImageTooLarge {
            name: "kernel",
            len: kernel.len(),
            max: MEM_SIZE,
        });
    }
    let user_max = MEM_SIZE - usize::from(USER_CODE);
    if user.len() > user_max {
        return Err(HostError::ImageTooLarge {
            name: "userspace",
            len: user.len(),
            max: user_max,
        });
    }
    let fs_max = machine.bus.fsdev().capacity();
    if fs_image.len() > fs_max {
        return Err(HostError::ImageTooLarge {
            name: "filesystem",
            len: fs_image.len(),
            max: fs_max,
        });
    }

    machine.mem.write_slice(KERNEL_BASE, kernel);
    machine.mem.write_slice(USER_CODE, user);
    machine.bus.fsdev_mut().load(fs_image);
    Ok(())
}

/// Drains `reader` to end-of-stream into the stdin device.
///
/// At most the device's capacity is captured; anything beyond it is silently
/// discarded, mirroring the device's own truncation rules. The device ends
/// with `size` equal to the captured length and its cursor rewound.
///
/// # Errors
///
/// Returns `HostError::Io` when the read fails.
pub fn drain_input(machine: &mut Machine, reader: impl Read) -> Result<usize, HostError> {
    let capacity = machine.bus.input().capacity();
    let mut captured = Vec::with_capacity(capacity);
    let _ = reader.take(capacity as u64).read_to_end(&mut captured)?;
    machine.bus.input_mut().load(&captured);
    Ok(captured.len())
}
