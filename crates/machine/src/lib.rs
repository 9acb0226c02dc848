//! Z80 hosting harness for the zasm cross-assembler image.
//!
//! This crate implements the device and port emulation layer that lets a
//! pre-built Z80 program run against virtual hardware:
//! 1. **Memory:** A flat 64 KiB image covering the full 16-bit address space.
//! 2. **Devices:** Two seekable block devices (captured stdin and an embedded
//!    filesystem image) plus a write-only console sink.
//! 3. **Bus:** A 4-port dispatcher multiplexing 16-bit seek/tell transfers
//!    over 8-bit ports.
//! 4. **Simulation:** Bootstrap loading, input capture, and the run-to-halt
//!    execution loop around an external CPU engine.

/// Common types and constants (memory layout, ports, errors).
pub mod common;
/// Harness configuration (output mode, device capacities, seek discipline).
pub mod config;
/// CPU core contract consumed by the execution loop.
pub mod core;
/// Bootstrap loader and run-to-halt execution loop.
pub mod sim;
/// Emulated hardware (memory image, block devices, console, port bus).
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// CPU engine capability; implemented by the CLI's Z80 adapter and test cores.
pub use crate::core::CpuCore;
/// Machine state object (memory plus port bus) stepped by the CPU core.
pub use crate::soc::Machine;
