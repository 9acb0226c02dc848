//! Fixed machine constants.
//!
//! These values are baked into the hosted image's glue code; changing them
//! here without reassembling the guest breaks the contract between the two.

/// Total addressable memory (full 16-bit address space).
pub const MEM_SIZE: usize = 0x1_0000;

/// Load address of the kernel (ROM glue) image.
pub const KERNEL_BASE: u16 = 0x0000;

/// Start of kernel RAM and stack. By convention only; not enforced.
pub const KERNEL_RAM: u16 = 0x4000;

/// Load address of the userspace (assembler) image.
pub const USER_CODE: u16 = 0x4800;

/// Start of userspace RAM. By convention only; not enforced.
pub const USER_RAM: u16 = 0x5800;

/// Data port shared by console output (writes) and captured stdin (reads).
pub const STDIO_PORT: u8 = 0x00;

/// Seek/tell port of the stdin block device.
pub const STDIN_SEEK_PORT: u8 = 0x01;

/// Data port of the filesystem block device.
pub const FS_DATA_PORT: u8 = 0x02;

/// Seek/tell port of the filesystem block device.
pub const FS_SEEK_PORT: u8 = 0x03;

/// Capacity of the stdin block device; input beyond this is discarded.
pub const STDIN_CAPACITY: usize = 0x8000;

/// Capacity of the filesystem block device.
pub const FS_CAPACITY: usize = 0xFFFF;
