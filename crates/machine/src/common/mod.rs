//! Common definitions shared across the harness.
//!
//! This module groups the fixed facts of the machine: the memory map and port
//! assignments the hosted image was assembled against, and the error type for
//! bootstrap-time failures.

/// Memory layout, port numbers, and device capacities.
pub mod constants;
/// Bootstrap error type.
pub mod error;

pub use error::HostError;
